//! Core geometry types for whorl.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = small stack values can be duplicated implicitly
//! - `PartialEq` = can compare with `==`
//!
//! A shell is nothing more than an ordered list of [`Segment`]s (boxes
//! sampled along the spiral) plus the [`BoundingBox`] around all of them.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One sampled box along the spiral.
///
/// The corners are not normalised: `start` is (left, bottom) and `end` is
/// (right, top) at generation time, and handedness may swap them. The
/// drawer relies on that orientation to mirror patterns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// Aggregate box over every segment of a shell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Segment {
    #[inline]
    pub fn new(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        Self { start_x, start_y, end_x, end_y }
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }

    /// Absolute box width.
    #[inline]
    pub fn width(&self) -> f64 {
        (self.end_x - self.start_x).abs()
    }

    /// Absolute box height.
    #[inline]
    pub fn height(&self) -> f64 {
        (self.end_y - self.start_y).abs()
    }

    /// Move every corner by `(dx, dy)`.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.start_x += dx;
        self.start_y += dy;
        self.end_x += dx;
        self.end_y += dy;
    }

    /// Multiply every corner by `factor` (scales about the canvas origin).
    #[inline]
    pub fn scale(&mut self, factor: f64) {
        self.start_x *= factor;
        self.start_y *= factor;
        self.end_x *= factor;
        self.end_y *= factor;
    }
}

impl BoundingBox {
    /// Global min/max over the four coordinates of every segment.
    ///
    /// Returns `None` for an empty slice, like `Polygon::bounding_box`
    /// does for an empty outline.
    pub fn from_segments(segments: &[Segment]) -> Option<Self> {
        let first = segments.first()?;

        let mut left = first.start_x.min(first.end_x);
        let mut top = first.start_y.min(first.end_y);
        let mut right = first.start_x.max(first.end_x);
        let mut bottom = first.start_y.max(first.end_y);

        for s in segments {
            left = left.min(s.start_x).min(s.end_x);
            top = top.min(s.start_y).min(s.end_y);
            right = right.max(s.start_x).max(s.end_x);
            bottom = bottom.max(s.start_y).max(s.end_y);
        }

        Some(Self {
            left,
            top,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        })
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

/// Round half toward positive infinity (`-2.5` becomes `-2`).
///
/// `f64::round` rounds half away from zero, which would shift negative
/// half-pixel corners by one compared with the classic canvas output.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
