//! Pattern registry: named outlines stretched onto spiral segments.
//!
//! Every pattern except [`Pattern::Circle`] maps to an immutable
//! [`PatternShape`]. Circle has no outline; the drawer renders it as a
//! primitive ellipse.

mod shapes;

use crate::geometry::Point;

/// A stored outline: anchor point, relative points, and the reference
/// size the outline was traced at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternShape {
    /// `points[0]` is the anchor, the rest are relative to it.
    pub points: &'static [[f64; 2]],
    /// Reference width used for the horizontal stretch ratio.
    pub width: f64,
    /// Reference height used for the vertical stretch ratio.
    pub height: f64,
}

/// Available pattern types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Circle,
    Whelk,
    Wonder,
    Rapa,
    Tun,
    Gallaghers,
    Eloise,
    Scallop,
    Lightning,
    Razor,
    Babylon,
    Oyster,
    Angel,
}

impl Pattern {
    /// Get all available patterns, circle included.
    pub fn all() -> &'static [Pattern] {
        &[
            Pattern::Circle,
            Pattern::Whelk,
            Pattern::Wonder,
            Pattern::Rapa,
            Pattern::Tun,
            Pattern::Gallaghers,
            Pattern::Eloise,
            Pattern::Scallop,
            Pattern::Lightning,
            Pattern::Razor,
            Pattern::Babylon,
            Pattern::Oyster,
            Pattern::Angel,
        ]
    }

    /// Patterns backed by a registry outline (everything but circle).
    ///
    /// This is the pool the breeder draws from when a pattern mutates.
    pub fn registry() -> &'static [Pattern] {
        &Self::all()[1..]
    }

    /// Get pattern name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Circle => "circle",
            Pattern::Whelk => "whelk",
            Pattern::Wonder => "wonder",
            Pattern::Rapa => "rapa",
            Pattern::Tun => "tun",
            Pattern::Gallaghers => "gallaghers",
            Pattern::Eloise => "eloise",
            Pattern::Scallop => "scallop",
            Pattern::Lightning => "lightning",
            Pattern::Razor => "razor",
            Pattern::Babylon => "babylon",
            Pattern::Oyster => "oyster",
            Pattern::Angel => "angel",
        }
    }

    /// Parse pattern from string.
    pub fn from_name(name: &str) -> Option<Pattern> {
        Self::all().iter().copied().find(|p| p.name() == name)
    }

    /// The stored outline, or `None` for the primitive circle.
    pub fn shape(&self) -> Option<&'static PatternShape> {
        let shape = match self {
            Pattern::Circle => return None,
            Pattern::Whelk => &shapes::WHELK,
            Pattern::Wonder => &shapes::WONDER,
            Pattern::Rapa => &shapes::RAPA,
            Pattern::Tun => &shapes::TUN,
            Pattern::Gallaghers => &shapes::GALLAGHERS,
            Pattern::Eloise => &shapes::ELOISE,
            Pattern::Scallop => &shapes::SCALLOP,
            Pattern::Lightning => &shapes::LIGHTNING,
            Pattern::Razor => &shapes::RAZOR,
            Pattern::Babylon => &shapes::BABYLON,
            Pattern::Oyster => &shapes::OYSTER,
            Pattern::Angel => &shapes::ANGEL,
        };
        Some(shape)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stretch a shape to fit a `w` x `h` box.
///
/// `invert` is `-1.0` or `1.0` and mirrors the horizontal axis. The result
/// keeps the anchor/relative layout of the source points.
pub fn scale_to_rect(shape: &PatternShape, w: f64, h: f64, invert: f64) -> Vec<Point> {
    let w_ratio = w / shape.width;
    let h_ratio = h / shape.height;

    shape
        .points
        .iter()
        .map(|[x, y]| Point::new(x * w_ratio * invert, y * h_ratio))
        .collect()
}
