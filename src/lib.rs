// MIT/Apache2 License

//! Configure a line width, line color and fill color once, then draw rectangles, squares, circles and
//! triangles onto any 2D [`Surface`] with a single call each.

#![forbid(unsafe_code)]

mod error;

pub mod color;
pub mod coord;
pub mod geometry;
pub mod intensity;
pub mod renderer;
pub mod style;
pub mod surface;

pub(crate) mod path_utils;

pub use color::*;
pub use coord::*;
pub use error::*;
pub use intensity::*;
pub use renderer::*;
pub use style::*;
pub use surface::*;
