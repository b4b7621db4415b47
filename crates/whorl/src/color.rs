//! Two-colour gradients for stroking segments apex to lip.

use rand::Rng;
use rand::seq::IndexedRandom;

/// An 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `#rrggbbaa`.
    pub fn to_hex_alpha(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

/// Alpha every segment is stroked with.
pub const STROKE_ALPHA: u8 = 0xbb;

/// The endpoint pairs a drawing picks its gradient from.
pub const PALETTE: [(Rgba, Rgba); 4] = [
    (Rgba::opaque(0xff, 0xc6, 0x6d), Rgba::opaque(0xfc, 0x74, 0x64)),
    (Rgba::opaque(0x1c, 0xa6, 0xf1), Rgba::opaque(0x09, 0xee, 0xb1)),
    (Rgba::opaque(0xea, 0x6f, 0xcc), Rgba::opaque(0x8d, 0x72, 0xee)),
    (Rgba::opaque(0x86, 0xf4, 0xba), Rgba::opaque(0x90, 0xd9, 0xea)),
];

/// Linear per-channel interpolation over a number range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    from: Rgba,
    to: Rgba,
    min: f64,
    max: f64,
}

impl Gradient {
    pub fn new(from: Rgba, to: Rgba, min: f64, max: f64) -> Self {
        Self { from, to, min, max }
    }

    /// Gradient over `[1, count]` with endpoints picked from [`PALETTE`].
    pub fn random<R: Rng>(rng: &mut R, count: usize) -> Self {
        let (from, to) = *PALETTE.choose(rng).unwrap_or(&PALETTE[0]);
        Self::new(from, to, 1.0, count.max(1) as f64)
    }

    /// Colour at `value`, clamped to the range. A degenerate range gives
    /// the start colour.
    pub fn color_at(&self, value: f64) -> Rgba {
        let span = self.max - self.min;
        if span <= 0.0 {
            return self.from;
        }

        let t = (value.clamp(self.min, self.max) - self.min) / span;
        let channel = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            (v + 0.5).floor().clamp(0.0, 255.0) as u8
        };

        Rgba::new(
            channel(self.from.r, self.to.r),
            channel(self.from.g, self.to.g),
            channel(self.from.b, self.to.b),
            channel(self.from.a, self.to.a),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn endpoints_and_midpoint() {
        let g = Gradient::new(Rgba::opaque(0, 0, 0), Rgba::opaque(200, 100, 51), 1.0, 3.0);
        assert_eq!(g.color_at(1.0), Rgba::opaque(0, 0, 0));
        assert_eq!(g.color_at(3.0), Rgba::opaque(200, 100, 51));
        assert_eq!(g.color_at(2.0), Rgba::opaque(100, 50, 26));
    }

    #[test]
    fn out_of_range_values_clamp() {
        let g = Gradient::new(Rgba::opaque(10, 10, 10), Rgba::opaque(20, 20, 20), 1.0, 5.0);
        assert_eq!(g.color_at(0.0), Rgba::opaque(10, 10, 10));
        assert_eq!(g.color_at(99.0), Rgba::opaque(20, 20, 20));
    }

    #[test]
    fn single_segment_range_is_start_colour() {
        let g = Gradient::new(Rgba::opaque(1, 2, 3), Rgba::opaque(4, 5, 6), 1.0, 1.0);
        assert_eq!(g.color_at(1.0), Rgba::opaque(1, 2, 3));
    }

    #[test]
    fn random_gradient_uses_palette() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let g = Gradient::random(&mut rng, 50);
            let start = g.color_at(1.0);
            assert!(PALETTE.iter().any(|(from, _)| *from == start));
        }
    }

    #[test]
    fn hex_formatting() {
        let c = Rgba::opaque(0xff, 0xc6, 0x6d).with_alpha(STROKE_ALPHA);
        assert_eq!(c.to_hex(), "#ffc66d");
        assert_eq!(c.to_hex_alpha(), "#ffc66dbb");
        assert!((c.opacity() - 187.0 / 255.0).abs() < 1e-12);
    }
}
