// MIT/Apache2 License

use crate::HexColor;
use std::fmt;

/// Sum error type for canvas-shapes operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A failure reported by a surface.
    Msg(String),
    /// A style setter was given a value it refuses to store.
    ///
    /// Only raised by renderers created with [`Validation::Strict`](crate::Validation::Strict).
    InvalidStyleValue(StyleValue),
    /// A shape was given a dimension or position it cannot be drawn with.
    ///
    /// Only raised by renderers created with [`Validation::Strict`](crate::Validation::Strict).
    InvalidGeometry {
        /// The name of the offending argument.
        argument: &'static str,
        /// The value that was passed in.
        value: f64,
    },
}

/// The style value rejected by a setter.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    LineWidth(f64),
    LineColor(HexColor),
    FillColor(HexColor),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Msg(s) => f.write_str(s),
            Self::InvalidStyleValue(StyleValue::LineWidth(w)) => {
                write!(f, "Line width {} is not a finite, non-negative number", w)
            }
            Self::InvalidStyleValue(StyleValue::LineColor(c)) => {
                write!(f, "Line color \"{}\" is not a valid hex color", c)
            }
            Self::InvalidStyleValue(StyleValue::FillColor(c)) => {
                write!(f, "Fill color \"{}\" is not a valid hex color", c)
            }
            Self::InvalidGeometry { argument, value } => {
                write!(f, "Cannot draw a shape with {} = {}", argument, value)
            }
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
