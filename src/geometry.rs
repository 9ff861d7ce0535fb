// MIT/Apache2 License

//! Vertex computations for the shapes that are drawn as polylines.
//!
//! Every outline returned here is closed explicitly: its last point repeats its first one.

use lyon_geom::{point, Point};
use std::f64::consts::PI;

/// A closed triangle outline: three corners plus the return to the first.
pub type TriangleOutline = [Point<f64>; 4];

/// The parameters of a circular arc, in the form a 2D context's `arc()` takes them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleArc {
    pub center: Point<f64>,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub anticlockwise: bool,
}

impl CircleArc {
    /// A complete clockwise revolution around `center`.
    #[inline]
    pub fn full(center: Point<f64>, radius: f64) -> Self {
        Self {
            center,
            radius,
            start_angle: 0.0,
            end_angle: 2.0 * PI,
            anticlockwise: false,
        }
    }

    /// The signed angle travelled from `start_angle` to `end_angle`, clamped to a single revolution.
    #[inline]
    pub fn sweep(&self) -> f64 {
        let sweep = self.end_angle - self.start_angle;
        let full = 2.0 * PI;
        match (self.anticlockwise, sweep) {
            (false, s) if s >= full => full,
            (true, s) if s <= -full => -full,
            (false, s) => s.rem_euclid(full),
            (true, s) => -(-s).rem_euclid(full),
        }
    }
}

/// Outline of a right-angle triangle whose right angle sits at `corner`.
///
/// The leg lengths are measured from `anchor` rather than from `corner`: the horizontal leg ends `width` to the
/// right of `anchor.x`, or to the left if `right_to_left` is set, and the vertical leg always ends `height`
/// above `anchor.y`. Every other coordinate is taken from `corner`. Callers pass the same point twice unless
/// the arithmetic has to happen on a rounded copy of the corner.
#[inline]
pub fn right_angle_triangle(
    corner: Point<f64>,
    anchor: Point<f64>,
    width: f64,
    height: f64,
    right_to_left: bool,
) -> TriangleOutline {
    let base_end = if right_to_left {
        anchor.x - width
    } else {
        anchor.x + width
    };

    [
        corner,
        point(base_end, corner.y),
        point(corner.x, anchor.y - height),
        corner,
    ]
}

/// Half the base and the height of an equilateral triangle with sides of length `side`.
///
/// The height comes out of Pythagoras, squaring and subtracting before the root, rather than from
/// `side * sqrt(3) / 2`; the two differ in the last bits.
#[inline]
pub fn equilateral_offsets(side: f64) -> (f64, f64) {
    let opposite = side / 2.0;
    let adjacent_squared = (side * side) - (opposite * opposite);
    (opposite, adjacent_squared.sqrt())
}

/// Outline of an equilateral triangle with its apex at `(left, top)` and a horizontal base below it.
#[inline]
pub fn equilateral_triangle(side: f64, left: f64, top: f64) -> TriangleOutline {
    let (opposite, adjacent) = equilateral_offsets(side);

    [
        point(left, top),
        point(left + opposite, top + adjacent),
        point(left - opposite, top + adjacent),
        point(left, top),
    ]
}
