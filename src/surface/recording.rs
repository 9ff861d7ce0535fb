// MIT/Apache2 License

use super::Surface;
use crate::HexColor;
use std::mem;

/// A single call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetLineWidth(f64),
    SetStrokeStyle(HexColor),
    SetFillStyle(HexColor),
    SetWidth(u32),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    Fill,
    Stroke,
}

impl Command {
    /// Whether this command puts pixels on the surface.
    #[inline]
    pub fn is_paint(&self) -> bool {
        matches!(self, Self::Fill | Self::Stroke)
    }

    /// Whether this command assigns one of the paint properties or the declared size.
    #[inline]
    pub fn is_property(&self) -> bool {
        matches!(
            self,
            Self::SetLineWidth(_) | Self::SetStrokeStyle(_) | Self::SetFillStyle(_) | Self::SetWidth(_)
        )
    }
}

/// An in-memory surface that behaves like a 2D canvas context and records every call made on it.
///
/// The paint properties follow canvas rules: a line width that is zero, negative or not finite is ignored, as
/// is a color that does not parse, and in both cases the previous value is kept. Assigning the declared width
/// wipes the painted content and resets the paint properties to a line width of `1` and black stroke and fill.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    line_width: f64,
    stroke_style: HexColor,
    fill_style: HexColor,
    commands: Vec<Command>,
    painted: usize,
}

impl Default for RecordingSurface {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl RecordingSurface {
    pub const DEFAULT_WIDTH: u32 = 300;
    pub const DEFAULT_HEIGHT: u32 = 150;
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
    pub const DEFAULT_STYLE: &'static str = "#000000";

    /// Create a new, blank surface with the given declared size.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            line_width: Self::DEFAULT_LINE_WIDTH,
            stroke_style: HexColor::new(Self::DEFAULT_STYLE),
            fill_style: HexColor::new(Self::DEFAULT_STYLE),
            commands: vec![],
            painted: 0,
        }
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The line width currently in effect.
    #[inline]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// The stroke style currently in effect.
    #[inline]
    pub fn stroke_style(&self) -> &HexColor {
        &self.stroke_style
    }

    /// The fill style currently in effect.
    #[inline]
    pub fn fill_style(&self) -> &HexColor {
        &self.fill_style
    }

    /// Every call made on this surface so far, in order.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Take the recorded calls, leaving the log empty. The surface's contents are not affected.
    #[inline]
    pub fn take_commands(&mut self) -> Vec<Command> {
        mem::take(&mut self.commands)
    }

    /// The recorded calls that build or paint paths, leaving out property assignments.
    #[inline]
    pub fn drawing_commands(&self) -> impl Iterator<Item = &Command> + '_ {
        self.commands.iter().filter(|c| !c.is_property())
    }

    /// Whether nothing has been painted since the surface was created or last cleared.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.painted == 0
    }

    #[inline]
    fn record(&mut self, command: Command) -> crate::Result {
        log::trace!("{:?}", &command);
        self.commands.push(command);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    #[inline]
    fn set_line_width(&mut self, line_width: f64) -> crate::Result {
        if line_width.is_finite() && line_width > 0.0 {
            self.line_width = line_width;
        } else {
            log::warn!("Ignoring unusable line width {}", line_width);
        }
        self.record(Command::SetLineWidth(line_width))
    }

    #[inline]
    fn set_stroke_style(&mut self, color: &HexColor) -> crate::Result {
        if color.to_color().is_some() {
            self.stroke_style = color.clone();
        } else {
            log::warn!("Ignoring unparseable stroke style \"{}\"", color);
        }
        self.record(Command::SetStrokeStyle(color.clone()))
    }

    #[inline]
    fn set_fill_style(&mut self, color: &HexColor) -> crate::Result {
        if color.to_color().is_some() {
            self.fill_style = color.clone();
        } else {
            log::warn!("Ignoring unparseable fill style \"{}\"", color);
        }
        self.record(Command::SetFillStyle(color.clone()))
    }

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn set_width(&mut self, width: u32) -> crate::Result {
        self.width = width;
        self.painted = 0;
        self.line_width = Self::DEFAULT_LINE_WIDTH;
        self.stroke_style = HexColor::new(Self::DEFAULT_STYLE);
        self.fill_style = HexColor::new(Self::DEFAULT_STYLE);
        self.record(Command::SetWidth(width))
    }

    #[inline]
    fn begin_path(&mut self) -> crate::Result {
        self.record(Command::BeginPath)
    }

    #[inline]
    fn move_to(&mut self, x: f64, y: f64) -> crate::Result {
        self.record(Command::MoveTo(x, y))
    }

    #[inline]
    fn line_to(&mut self, x: f64, y: f64) -> crate::Result {
        self.record(Command::LineTo(x, y))
    }

    #[inline]
    fn close_path(&mut self) -> crate::Result {
        self.record(Command::ClosePath)
    }

    #[inline]
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> crate::Result {
        self.record(Command::Rect {
            x,
            y,
            width,
            height,
        })
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
        self.record(Command::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        })
    }

    #[inline]
    fn fill(&mut self) -> crate::Result {
        self.painted += 1;
        self.record(Command::Fill)
    }

    #[inline]
    fn stroke(&mut self) -> crate::Result {
        self.painted += 1;
        self.record(Command::Stroke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_canvas_defaults() {
        let surface = RecordingSurface::default();
        assert_eq!(surface.width(), 300);
        assert_eq!(surface.height(), 150);
        assert_eq!(surface.line_width(), 1.0);
        assert_eq!(surface.stroke_style(), "#000000");
        assert_eq!(surface.fill_style(), "#000000");
        assert!(surface.is_blank());
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn ignores_unusable_properties() {
        let mut surface = RecordingSurface::default();
        surface.set_line_width(4.0).unwrap();
        surface.set_line_width(0.0).unwrap();
        surface.set_line_width(-3.0).unwrap();
        surface.set_line_width(f64::NAN).unwrap();
        assert_eq!(surface.line_width(), 4.0);

        surface.set_stroke_style(&HexColor::new("#0f0")).unwrap();
        surface.set_stroke_style(&HexColor::new("green")).unwrap();
        assert_eq!(surface.stroke_style(), "#0f0");

        surface.set_fill_style(&HexColor::new("#nothex")).unwrap();
        assert_eq!(surface.fill_style(), "#000000");

        // every call is still recorded
        assert_eq!(surface.commands().len(), 7);
    }

    #[test]
    fn assigning_width_clears_and_resets() {
        let mut surface = RecordingSurface::new(640, 480);
        surface.set_line_width(3.0).unwrap();
        surface.set_fill_style(&HexColor::new("#abc")).unwrap();
        surface.begin_path().unwrap();
        surface.rect(0.0, 0.0, 10.0, 10.0).unwrap();
        surface.fill().unwrap();
        assert!(!surface.is_blank());

        let width = surface.width();
        surface.set_width(width).unwrap();

        assert!(surface.is_blank());
        assert_eq!(surface.width(), 640);
        assert_eq!(surface.height(), 480);
        assert_eq!(surface.line_width(), 1.0);
        assert_eq!(surface.fill_style(), "#000000");
        assert_eq!(surface.commands().last(), Some(&Command::SetWidth(640)));
    }

    #[test]
    fn drawing_commands_skip_properties() {
        let mut surface = RecordingSurface::default();
        surface.set_line_width(2.0).unwrap();
        surface.begin_path().unwrap();
        surface.move_to(1.0, 2.0).unwrap();
        surface.stroke().unwrap();

        let drawing: Vec<&Command> = surface.drawing_commands().collect();
        assert_eq!(
            drawing,
            vec![&Command::BeginPath, &Command::MoveTo(1.0, 2.0), &Command::Stroke]
        );

        let taken = surface.take_commands();
        assert_eq!(taken.len(), 4);
        assert!(surface.commands().is_empty());
        assert!(!surface.is_blank());
    }
}
