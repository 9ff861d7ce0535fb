// MIT/Apache2 License

use crate::HexColor;

/// Default implementations of `Surface` functions.
mod defaults;
/// Implements `Surface` on `&mut Surface`.
mod mut_impl;
/// Provides the in-memory `RecordingSurface`.
mod recording;

pub use recording::{Command, RecordingSurface};

/// Something that can be drawn upon, in the manner of a 2D canvas context.
///
/// A `Surface` keeps three paint properties (line width, stroke style and fill style) and one "current path"
/// that is built up with the path construction methods and then painted with `fill()` and `stroke()`, both of
/// which use the paint properties in effect at the time they are called.
///
/// No matter what, `Surface`s should be capable of the following:
///
/// * Storing the paint properties through `set_line_width`, `set_stroke_style` and `set_fill_style`. A
///   surface may ignore values it cannot use, such as a non-positive line width or a string that is not a
///   color; it should keep its previous value in that case rather than fail.
/// * Building paths. Implementors only need to implement `begin_path()`, `move_to()`, `line_to()` and
///   `close_path()`; `rect()` and `arc()` are implemented in terms of those. It is usually better to
///   reimplement them with the system drawing API, since the default `arc()` approximates the curve with
///   line segments.
/// * Filling and stroking the current path.
/// * Reporting its declared width and accepting a new one. Assigning the declared width, even to the value it
///   already has, wipes every painted pixel and resets the paint properties to the surface's own defaults.
pub trait Surface {
    /* Paint Properties */

    /// Set the width of the lines that outlines are stroked with.
    fn set_line_width(&mut self, line_width: f64) -> crate::Result;
    /// Set the color that outlines are stroked with.
    fn set_stroke_style(&mut self, color: &HexColor) -> crate::Result;
    /// Set the color that shapes are filled with.
    fn set_fill_style(&mut self, color: &HexColor) -> crate::Result;

    /* Declared Size */

    /// Get the declared width of the surface, in pixels.
    fn width(&self) -> u32;
    /// Assign the declared width of the surface. This clears the surface.
    fn set_width(&mut self, width: u32) -> crate::Result;

    /// Flush all drawing operations down the connection, if necessary.
    #[inline]
    fn flush(&mut self) -> crate::Result {
        Ok(())
    }

    /* Path Construction */

    /// Discard the current path and start an empty one.
    fn begin_path(&mut self) -> crate::Result;
    /// Start a new sub-path at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64) -> crate::Result;
    /// Add a straight line from the current point to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64) -> crate::Result;
    /// Connect the current point back to the start of the current sub-path.
    fn close_path(&mut self) -> crate::Result;

    /// Add a closed, axis-aligned rectangle sub-path with its top-left corner at `(x, y)`.
    #[inline]
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> crate::Result {
        defaults::rect(self, x, y, width, height)
    }

    /// Add a circular arc around `(x, y)`, going from `start_angle` to `end_angle` (in radians, clockwise
    /// unless `anticlockwise` is set).
    ///
    /// The default implementation starts a new sub-path at the beginning of the arc and approximates the curve
    /// with line segments.
    #[inline]
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> crate::Result {
        defaults::arc(self, x, y, radius, start_angle, end_angle, anticlockwise)
    }

    /* Painting */

    /// Fill the current path with the fill style.
    fn fill(&mut self) -> crate::Result;
    /// Outline the current path with the stroke style and line width.
    fn stroke(&mut self) -> crate::Result;
}
