//! The drawing-surface capability the renderer strokes onto.
//!
//! ## Rust Lesson #31: Traits as Capabilities
//!
//! The renderer never owns a canvas. It is handed `&mut impl Surface` for
//! the duration of one call, so there is no hidden drawing state that
//! survives between draws.

use crate::color::Rgba;
use crate::geometry::Point;

/// Path construction and stroking primitives, modeled on a 2D canvas.
pub trait Surface {
    /// Wipe a `width` x `height` area.
    fn clear(&mut self, width: f64, height: f64);
    /// Start a fresh path; anything not stroked is discarded.
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn bezier_curve_to(&mut self, c1: Point, c2: Point, to: Point);
    fn close_path(&mut self);
    fn set_stroke_color(&mut self, color: Rgba);
    /// Stroke the current path with the current stroke colour.
    fn stroke(&mut self);
}

/// One recorded surface call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Clear { width: f64, height: f64 },
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    BezierCurveTo(Point, Point, Point),
    ClosePath,
    SetStrokeColor(Rgba),
    Stroke,
}

/// A surface that only remembers what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct Recording {
    pub commands: Vec<Command>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `stroke` calls, i.e. segments drawn.
    pub fn strokes(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, Command::Stroke)).count()
    }
}

impl Surface for Recording {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.clear();
        self.commands.push(Command::Clear { width, height });
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(Command::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(Command::LineTo(p));
    }

    fn bezier_curve_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.commands.push(Command::BezierCurveTo(c1, c2, to));
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.commands.push(Command::SetStrokeColor(color));
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }
}
