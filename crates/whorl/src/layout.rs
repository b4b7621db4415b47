//! Geometry transformer: bounding box, centring and fitting.
//!
//! A [`Layout`] exclusively owns the segment buffer of one shell plus the
//! canvas it is fitted to, and transforms the segments in place.

use crate::error::ShellError;
use crate::geometry::{round_half_up, BoundingBox, Point, Segment};

/// Segments placed on a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    canvas_width: f64,
    canvas_height: f64,
    /// Moves with every scale/translate.
    centre: Point,
    /// Canvas midpoint; the anchor for fitting.
    origin: Point,
    segments: Vec<Segment>,
    bbox: BoundingBox,
}

impl Layout {
    /// Empty layout on a `width` x `height` canvas, centre at the midpoint.
    pub fn new(width: u32, height: u32) -> Result<Self, ShellError> {
        if width == 0 || height == 0 {
            return Err(ShellError::InvalidCanvas { width, height });
        }

        let origin = Point::new(
            round_half_up(f64::from(width) / 2.0),
            round_half_up(f64::from(height) / 2.0),
        );

        Ok(Self {
            canvas_width: f64::from(width),
            canvas_height: f64::from(height),
            centre: origin,
            origin,
            segments: Vec::new(),
            bbox: BoundingBox::default(),
        })
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn centre(&self) -> Point {
        self.centre
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Put the centre back on the canvas midpoint.
    pub fn reset_centre(&mut self) {
        self.centre = self.origin;
    }

    /// Replace the segment buffer and recompute the box.
    pub fn set_segments(&mut self, segments: Vec<Segment>) -> Result<(), ShellError> {
        if segments.is_empty() {
            return Err(ShellError::EmptyGeometry);
        }
        self.segments = segments;
        self.set_bounding_box();
        Ok(())
    }

    /// Scan every segment corner for the global min/max.
    pub fn set_bounding_box(&mut self) {
        if let Some(bbox) = BoundingBox::from_segments(&self.segments) {
            self.bbox = bbox;
        }
    }

    /// Horizontal shift that puts the centre midway between the box edges.
    pub fn horizontal_offset(&self) -> f64 {
        let left = self.centre.x - self.bbox.left;
        let right = self.bbox.right - self.centre.x;
        (left - right) / 2.0
    }

    /// Vertical shift that puts the centre midway between the box edges.
    pub fn vertical_offset(&self) -> f64 {
        let top = self.centre.y - self.bbox.top;
        let bottom = self.bbox.bottom - self.centre.y;
        (top - bottom) / 2.0
    }

    /// Multiply the centre and every coordinate by `factor`.
    ///
    /// The box is left stale; callers recompute it once they are done.
    pub fn scale(&mut self, factor: f64) {
        self.centre.x *= factor;
        self.centre.y *= factor;
        for segment in &mut self.segments {
            segment.scale(factor);
        }
    }

    /// Shift the centre and every coordinate by `(dx, dy)`.
    ///
    /// The box is left stale; callers recompute it once they are done.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.centre.x += dx;
        self.centre.y += dy;
        for segment in &mut self.segments {
            segment.translate(dx, dy);
        }
    }

    /// Recentre the raw spiral on its own geometric centre.
    pub fn recentre(&mut self) {
        let (dx, dy) = (self.horizontal_offset(), self.vertical_offset());
        self.translate(dx, dy);
    }

    /// Shrink the figure so its box fits in `ratio` of the canvas.
    ///
    /// Only ever shrinks. The shrink is anchored at the canvas origin, not
    /// the shell's own centre. Returns the applied scale, if any.
    pub fn scale_to_box(&mut self, ratio: f64) -> Option<f64> {
        let max_width = self.canvas_width * ratio;
        let max_height = self.canvas_height * ratio;

        if self.bbox.width <= max_width && self.bbox.height <= max_height {
            return None;
        }

        let scale = (max_width / self.bbox.width).min(max_height / self.bbox.height);
        self.scale(scale);
        self.translate(self.origin.x * (1.0 - scale), self.origin.y * (1.0 - scale));
        self.set_bounding_box();

        tracing::debug!(scale, width = self.bbox.width, height = self.bbox.height, "fitted shell to canvas");
        Some(scale)
    }
}
