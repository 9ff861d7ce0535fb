// MIT/Apache2 License

use super::Surface;
use crate::{geometry::CircleArc, path_utils};
use lyon_geom::{point, vector, Angle, Arc, Point};
use lyon_path::{builder::PathBuilder, path::Builder};

/// Maximum distance between the true curve and its line approximation.
const ARC_TOLERANCE: f64 = 0.334;
/// Upper bound on the chords used for a single arc, reached by very large radii.
const MAX_ARC_SEGMENTS: u32 = 1024;

#[inline]
pub(crate) fn rect<S: Surface + ?Sized>(
    s: &mut S,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> crate::Result {
    if ![x, y, width, height].iter().all(|v| v.is_finite()) {
        log::warn!(
            "Ignoring rectangle with non-finite geometry ({}, {}, {}, {})",
            x,
            y,
            width,
            height
        );
        return Ok(());
    }

    let mut builder = Builder::with_capacity(4, 4);
    build_rectangle(
        &mut builder,
        x as f32,
        y as f32,
        width as f32,
        height as f32,
    );
    let path = builder.build();

    path_utils::trace_path(s, path.iter())
}

#[inline]
pub(crate) fn arc<S: Surface + ?Sized>(
    s: &mut S,
    x: f64,
    y: f64,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    anticlockwise: bool,
) -> crate::Result {
    if ![x, y, radius, start_angle, end_angle]
        .iter()
        .all(|v| v.is_finite())
        || radius < 0.0
    {
        log::warn!(
            "Ignoring arc with unusable geometry (center ({}, {}), radius {})",
            x,
            y,
            radius
        );
        return Ok(());
    }

    let sweep = CircleArc {
        center: point(x, y),
        radius,
        start_angle,
        end_angle,
        anticlockwise,
    }
    .sweep();

    let narrowed = [x as f32, y as f32, radius as f32];
    if !narrowed.iter().all(|v| v.is_finite()) {
        log::warn!(
            "Ignoring arc too large to approximate (center ({}, {}), radius {})",
            x,
            y,
            radius
        );
        return Ok(());
    }

    let segments = arc_segments(radius, sweep);
    let arc = Arc {
        center: point(x as f32, y as f32),
        radii: vector(radius as f32, radius as f32),
        start_angle: Angle::radians(start_angle as f32),
        sweep_angle: Angle::radians(sweep as f32),
        x_rotation: Angle::zero(),
    };

    let mut builder = Builder::new();
    build_arc(&mut builder, arc, segments);
    let path = builder.build();

    path_utils::trace_path(s, path.iter())
}

#[inline]
fn build_rectangle<B: PathBuilder>(builder: &mut B, x: f32, y: f32, width: f32, height: f32) {
    builder.begin(Point::new(x, y));
    builder.line_to(Point::new(x + width, y));
    builder.line_to(Point::new(x + width, y + height));
    builder.line_to(Point::new(x, y + height));
    builder.close();
}

#[inline]
fn build_arc<B: PathBuilder>(builder: &mut B, arc: Arc<f32>, segments: u32) {
    builder.begin(arc.from());

    // a zero radius collapses to its center
    if arc.radii.x > 0.0 && arc.sweep_angle.radians != 0.0 {
        (1..=segments).for_each(|i| {
            builder.line_to(arc.sample(i as f32 / segments as f32));
        });
    }

    let full_circle = std::f32::consts::PI * 2.0;
    let divided = arc.sweep_angle.radians / full_circle;

    // is this close to a multiple of 2*pi?
    builder.end(divided != 0.0 && approx::abs_diff_eq!(divided.round(), divided, epsilon = 1e-6));
}

/// Number of chords needed so that none strays further than `ARC_TOLERANCE` from the curve, capped at
/// `MAX_ARC_SEGMENTS`.
#[inline]
fn arc_segments(radius: f64, sweep: f64) -> u32 {
    // radii below half the tolerance fit in a single chord
    let step = 2.0 * (1.0 - ARC_TOLERANCE / radius).max(-1.0).acos();
    if !(step.is_finite() && step > 0.0) {
        return MAX_ARC_SEGMENTS;
    }

    (sweep.abs() / step)
        .ceil()
        .max(1.0)
        .min(f64::from(MAX_ARC_SEGMENTS)) as u32
}
