// MIT/Apache2 License

use crate::{
    geometry::{self, CircleArc},
    style::{Defaults, Validation, DEFAULT_FILL_COLOR, DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH},
    Coord, Error, HexColor, StyleValue, Surface,
};
use lyon_geom::{point, Point};

/// The version of the shape drawing interface.
pub const VERSION: &str = "0.1";

/// Draws simple shapes onto a [`Surface`] using a line width, line color and fill color configured ahead of
/// time.
///
/// Every shape is filled with the fill color first, then outlined with the line color, unless the line width
/// is zero, in which case no outline is drawn. Nothing about a shape is retained after it has been drawn.
///
/// The style setters assign the matching paint property on the surface as they go, so the surface always
/// paints with what the getters report. Changing the surface's paint properties through
/// [`surface_mut`](Self::surface_mut) breaks that correspondence until the next setter call or
/// [`clear`](Self::clear).
///
/// # Example
///
/// ```
/// use canvas_shapes::{Defaults, RecordingSurface, ShapeRenderer};
///
/// let defaults = Defaults::default().with_fill_color("f00");
/// let mut shapes = ShapeRenderer::new(RecordingSurface::default(), Some(defaults))?;
/// shapes.square(40.0, 10.0, 10.0)?;
/// shapes.set_line_width(0.0)?;
/// shapes.circle(20.0, 100.0, 50.0)?;
/// assert_eq!(shapes.fill_color(), "#f00");
/// # Ok::<(), canvas_shapes::Error>(())
/// ```
#[derive(Debug)]
pub struct ShapeRenderer<S> {
    surface: S,
    line_width: f64,
    line_color: HexColor,
    fill_color: HexColor,
    validation: Validation,
}

impl<S: Surface> ShapeRenderer<S> {
    /// Create a renderer drawing onto `surface`.
    ///
    /// Each value missing from `defaults`, or all of them if `defaults` is `None`, falls back to a line width
    /// of `1`, a `#000` line color and a `#fff` fill color. The surface's paint properties are assigned before
    /// this returns.
    #[inline]
    pub fn new(surface: S, defaults: Option<Defaults>) -> crate::Result<Self> {
        Self::with_validation(surface, defaults, Validation::default())
    }

    /// Create a renderer with the given validation mode. See [`Validation`].
    pub fn with_validation(
        surface: S,
        defaults: Option<Defaults>,
        validation: Validation,
    ) -> crate::Result<Self> {
        let defaults = defaults.unwrap_or_default();
        let mut this = Self {
            surface,
            line_width: DEFAULT_LINE_WIDTH,
            line_color: HexColor::new(DEFAULT_LINE_COLOR),
            fill_color: HexColor::new(DEFAULT_FILL_COLOR),
            validation,
        };

        this.set_line_width(defaults.line_width_or_default())?;
        this.set_line_color(defaults.line_color_or_default())?;
        this.set_fill_color(defaults.fill_color_or_default())?;

        Ok(this)
    }

    /// The version of the shape drawing interface.
    #[inline]
    pub fn version() -> &'static str {
        VERSION
    }

    /// The validation mode this renderer was created with.
    #[inline]
    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// The surface being drawn on.
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface being drawn on.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back, dropping the style state.
    #[inline]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /* Style */

    /// Set the width of shape outlines. A width of zero turns outlines off.
    pub fn set_line_width(&mut self, width: f64) -> crate::Result {
        if self.is_strict() && !(width.is_finite() && width >= 0.0) {
            return Err(Error::InvalidStyleValue(StyleValue::LineWidth(width)));
        }

        log::debug!("Setting line width to {}", width);
        self.line_width = width;
        self.surface.set_line_width(width)
    }

    /// The current outline width.
    #[inline]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Set the color of shape outlines. A `#` is prepended if `color` does not start with one.
    pub fn set_line_color(&mut self, color: impl Into<HexColor>) -> crate::Result {
        let color = color.into();
        if self.is_strict() && color.to_color().is_none() {
            return Err(Error::InvalidStyleValue(StyleValue::LineColor(color)));
        }

        log::debug!("Setting line color to {}", &color);
        self.line_color = color;
        self.surface.set_stroke_style(&self.line_color)
    }

    /// The current outline color, always starting with `#`.
    #[inline]
    pub fn line_color(&self) -> &HexColor {
        &self.line_color
    }

    /// Set the color shapes are filled with. A `#` is prepended if `color` does not start with one.
    pub fn set_fill_color(&mut self, color: impl Into<HexColor>) -> crate::Result {
        let color = color.into();
        if self.is_strict() && color.to_color().is_none() {
            return Err(Error::InvalidStyleValue(StyleValue::FillColor(color)));
        }

        log::debug!("Setting fill color to {}", &color);
        self.fill_color = color;
        self.surface.set_fill_style(&self.fill_color)
    }

    /// The current fill color, always starting with `#`.
    #[inline]
    pub fn fill_color(&self) -> &HexColor {
        &self.fill_color
    }

    /// Set the line width, line color and fill color, in that order.
    ///
    /// This is three separate assignments. If one fails, the ones before it stay in effect.
    #[inline]
    pub fn set_lines_and_fill(
        &mut self,
        width: f64,
        line_color: impl Into<HexColor>,
        fill_color: impl Into<HexColor>,
    ) -> crate::Result {
        self.set_line_width(width)?;
        self.set_line_color(line_color)?;
        self.set_fill_color(fill_color)
    }

    /// Wipe everything painted on the surface. The style is left alone.
    ///
    /// The surface is cleared by assigning its declared width back to itself. Since that also resets the
    /// surface's paint properties, the current style is assigned to it again afterwards.
    pub fn clear(&mut self) -> crate::Result {
        let width = self.surface.width();
        log::debug!("Clearing surface of width {}", width);
        self.surface.set_width(width)?;

        self.surface.set_line_width(self.line_width)?;
        self.surface.set_stroke_style(&self.line_color)?;
        self.surface.set_fill_style(&self.fill_color)?;
        self.surface.flush()
    }

    /* Shapes */

    /// Draw a square with its top-left corner at `(left, top)`.
    #[inline]
    pub fn square(&mut self, side: f64, left: f64, top: f64) -> crate::Result {
        self.rectangle(side, side, left, top)
    }

    /// Draw an axis-aligned rectangle with its top-left corner at `(left, top)`.
    pub fn rectangle(&mut self, width: f64, height: f64, left: f64, top: f64) -> crate::Result {
        self.check_dimension("width", width)?;
        self.check_dimension("height", height)?;
        self.check_position("left", left)?;
        self.check_position("top", top)?;

        log::debug!(
            "Drawing {}x{} rectangle at ({}, {})",
            width,
            height,
            left,
            top
        );
        self.surface.begin_path()?;
        self.surface.rect(left, top, width, height)?;
        self.paint()
    }

    /// Draw a circle around `(center_left, center_top)`.
    pub fn circle(&mut self, radius: f64, center_left: f64, center_top: f64) -> crate::Result {
        self.check_dimension("radius", radius)?;
        self.check_position("center_left", center_left)?;
        self.check_position("center_top", center_top)?;

        log::debug!(
            "Drawing circle of radius {} at ({}, {})",
            radius,
            center_left,
            center_top
        );
        let CircleArc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        } = CircleArc::full(point(center_left, center_top), radius);

        self.surface.begin_path()?;
        self.surface.arc(
            center.x,
            center.y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        )?;
        self.paint()
    }

    /// Draw a right-angle triangle with the right angle at `(left, top)`.
    ///
    /// The horizontal leg is `width` long and runs to the right, or to the left if `right_to_left` is set. The
    /// vertical leg is `height` long and always runs upward.
    ///
    /// Every argument may be a number or a numeric string. The leg ends are computed on integers, as described by
    /// [`Coord::to_integer`], so a string without any leading digits turns them into `NaN` and leaves the path
    /// degenerate. The corner itself is passed to the surface unrounded, as described by [`Coord::to_number`].
    pub fn right_angle_triangle<'a>(
        &mut self,
        width: impl Into<Coord<'a>>,
        height: impl Into<Coord<'a>>,
        left: impl Into<Coord<'a>>,
        top: impl Into<Coord<'a>>,
        right_to_left: bool,
    ) -> crate::Result {
        let (left, top): (Coord<'a>, Coord<'a>) = (left.into(), top.into());
        let corner = point(left.to_number(), top.to_number());
        let anchor = point(left.to_integer(), top.to_integer());
        let width = width.into().to_integer();
        let height = height.into().to_integer();

        self.check_dimension("width", width)?;
        self.check_dimension("height", height)?;
        self.check_position("left", corner.x)?;
        self.check_position("left", anchor.x)?;
        self.check_position("top", corner.y)?;
        self.check_position("top", anchor.y)?;

        log::debug!(
            "Drawing {}x{} right-angle triangle at ({}, {}), right to left: {}",
            width,
            height,
            corner.x,
            corner.y,
            right_to_left
        );
        let outline = geometry::right_angle_triangle(corner, anchor, width, height, right_to_left);
        self.trace_outline(&outline)?;
        self.paint()
    }

    /// Draw an equilateral triangle with its apex at `(left, top)` and a horizontal base below it.
    pub fn equilateral_triangle(&mut self, side: f64, left: f64, top: f64) -> crate::Result {
        self.check_dimension("side", side)?;
        self.check_position("left", left)?;
        self.check_position("top", top)?;

        log::debug!(
            "Drawing equilateral triangle of side {} at ({}, {})",
            side,
            left,
            top
        );
        let outline = geometry::equilateral_triangle(side, left, top);
        self.trace_outline(&outline)?;
        self.paint()
    }

    /* Internals */

    #[inline]
    fn is_strict(&self) -> bool {
        self.validation == Validation::Strict
    }

    #[inline]
    fn check_dimension(&self, argument: &'static str, value: f64) -> crate::Result {
        if self.is_strict() && !(value.is_finite() && value >= 0.0) {
            Err(Error::InvalidGeometry { argument, value })
        } else {
            Ok(())
        }
    }

    #[inline]
    fn check_position(&self, argument: &'static str, value: f64) -> crate::Result {
        if self.is_strict() && !value.is_finite() {
            Err(Error::InvalidGeometry { argument, value })
        } else {
            Ok(())
        }
    }

    /// Start a new path along `outline`.
    fn trace_outline(&mut self, outline: &[Point<f64>]) -> crate::Result {
        self.surface.begin_path()?;

        let (first, rest) = match outline.split_first() {
            Some(split) => split,
            None => return Ok(()),
        };
        self.surface.move_to(first.x, first.y)?;
        rest.iter()
            .try_for_each(|pt| self.surface.line_to(pt.x, pt.y))
    }

    /// Fill the current path, then outline it if outlines are on.
    #[inline]
    fn paint(&mut self) -> crate::Result {
        self.surface.fill()?;
        if self.line_width > 0.0 {
            self.surface.stroke()?;
        }
        self.surface.flush()
    }
}
