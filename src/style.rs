// MIT/Apache2 License

/// Line width used when none is configured.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
/// Line color used when none is configured.
pub const DEFAULT_LINE_COLOR: &str = "#000";
/// Fill color used when none is configured.
pub const DEFAULT_FILL_COLOR: &str = "#fff";

/// Style values a [`ShapeRenderer`](crate::ShapeRenderer) starts out with.
///
/// Every field is optional. A field left as `None` falls back to the library default for that field alone, so
/// `Defaults::default().with_line_color("f00")` gives a red line with the default width and fill.
///
/// With the `serde-types` feature this can be deserialized from any format with `lineWidth`, `lineColor` and
/// `fillColor` keys, all of them optional.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Defaults {
    pub line_width: Option<f64>,
    pub line_color: Option<String>,
    pub fill_color: Option<String>,
}

impl Defaults {
    #[inline]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }

    #[inline]
    pub fn with_line_color(mut self, line_color: impl Into<String>) -> Self {
        self.line_color = Some(line_color.into());
        self
    }

    #[inline]
    pub fn with_fill_color(mut self, fill_color: impl Into<String>) -> Self {
        self.fill_color = Some(fill_color.into());
        self
    }

    /// The line width to start with, after falling back.
    #[inline]
    pub fn line_width_or_default(&self) -> f64 {
        self.line_width.unwrap_or(DEFAULT_LINE_WIDTH)
    }

    /// The line color to start with, after falling back.
    #[inline]
    pub fn line_color_or_default(&self) -> &str {
        self.line_color.as_deref().unwrap_or(DEFAULT_LINE_COLOR)
    }

    /// The fill color to start with, after falling back.
    #[inline]
    pub fn fill_color_or_default(&self) -> &str {
        self.fill_color.as_deref().unwrap_or(DEFAULT_FILL_COLOR)
    }
}

/// How strictly a renderer checks the values it is given.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Validation {
    /// Only normalize colors. Everything else is passed through to the surface, which decides what to do with
    /// values it cannot use.
    Permissive,
    /// Reject line widths that are negative or not finite and colors that do not parse, with
    /// [`Error::InvalidStyleValue`](crate::Error::InvalidStyleValue). Reject shapes with negative or non-finite
    /// dimensions or non-finite positions, with [`Error::InvalidGeometry`](crate::Error::InvalidGeometry).
    Strict,
}

impl Default for Validation {
    #[inline]
    fn default() -> Self {
        Self::Permissive
    }
}
