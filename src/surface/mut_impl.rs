// MIT/Apache2 License

use super::Surface;
use crate::HexColor;

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn set_line_width(&mut self, line_width: f64) -> crate::Result {
        (**self).set_line_width(line_width)
    }
    #[inline]
    fn set_stroke_style(&mut self, color: &HexColor) -> crate::Result {
        (**self).set_stroke_style(color)
    }
    #[inline]
    fn set_fill_style(&mut self, color: &HexColor) -> crate::Result {
        (**self).set_fill_style(color)
    }
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }
    #[inline]
    fn set_width(&mut self, width: u32) -> crate::Result {
        (**self).set_width(width)
    }
    #[inline]
    fn flush(&mut self) -> crate::Result {
        (**self).flush()
    }
    #[inline]
    fn begin_path(&mut self) -> crate::Result {
        (**self).begin_path()
    }
    #[inline]
    fn move_to(&mut self, x: f64, y: f64) -> crate::Result {
        (**self).move_to(x, y)
    }
    #[inline]
    fn line_to(&mut self, x: f64, y: f64) -> crate::Result {
        (**self).line_to(x, y)
    }
    #[inline]
    fn close_path(&mut self) -> crate::Result {
        (**self).close_path()
    }
    #[inline]
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> crate::Result {
        (**self).rect(x, y, width, height)
    }
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
        (**self).arc(x, y, radius, start_angle, end_angle, anticlockwise)
    }
    #[inline]
    fn fill(&mut self) -> crate::Result {
        (**self).fill()
    }
    #[inline]
    fn stroke(&mut self) -> crate::Result {
        (**self).stroke()
    }
}
