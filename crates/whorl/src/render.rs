//! Renderer: one full repaint of a shell onto a surface.

use rand::Rng;

use crate::color::{Gradient, STROKE_ALPHA};
use crate::draw::draw_segment;
use crate::geometry::Segment;
use crate::patterns::Pattern;
use crate::surface::Surface;

/// What a draw call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawStats {
    /// Segments stroked.
    pub visited: usize,
    /// Segments available.
    pub total: usize,
}

/// Clear the surface and stroke every segment, apex first.
///
/// The gradient endpoints are picked at random for each call. `lofi`
/// strokes every other segment for a cheaper preview. Each segment gets
/// its own path, so no path state leaks from one to the next.
pub fn draw<S, R>(
    surface: &mut S,
    rng: &mut R,
    pattern: Pattern,
    segments: &[Segment],
    canvas: (f64, f64),
    lofi: bool,
) -> DrawStats
where
    S: Surface + ?Sized,
    R: Rng,
{
    let total = segments.len();
    let gradient = Gradient::random(rng, total);
    let step = if lofi { 2 } else { 1 };

    surface.clear(canvas.0, canvas.1);

    let mut visited = 0;
    for (index, segment) in segments.iter().enumerate().step_by(step) {
        surface.begin_path();
        surface.set_stroke_color(gradient.color_at(index as f64).with_alpha(STROKE_ALPHA));
        draw_segment(surface, pattern, segment, index, total);
        surface.stroke();
        surface.close_path();
        visited += 1;
    }

    tracing::debug!(visited, total, lofi, %pattern, "drew shell");
    DrawStats { visited, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Command, Recording};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn segments(n: usize) -> Vec<Segment> {
        (0..n)
            .map(|i| Segment::new(i as f64, 0.0, i as f64 + 30.0, 30.0))
            .collect()
    }

    #[test]
    fn full_draw_visits_everything() {
        let mut rec = Recording::new();
        let mut rng = StdRng::seed_from_u64(1);
        let stats = draw(&mut rec, &mut rng, Pattern::Circle, &segments(7), (100.0, 100.0), false);
        assert_eq!(stats, DrawStats { visited: 7, total: 7 });
        assert_eq!(rec.strokes(), 7);
        assert_eq!(rec.commands[0], Command::Clear { width: 100.0, height: 100.0 });
    }

    #[test]
    fn lofi_visits_half_rounded_up() {
        for n in [1, 2, 7, 8, 199] {
            let mut rec = Recording::new();
            let mut rng = StdRng::seed_from_u64(n as u64);
            let stats = draw(&mut rec, &mut rng, Pattern::Whelk, &segments(n), (100.0, 100.0), true);
            assert_eq!(stats.visited, n.div_ceil(2));
            assert_eq!(rec.strokes(), n.div_ceil(2));
        }
    }

    #[test]
    fn every_segment_gets_its_own_path_and_colour() {
        let mut rec = Recording::new();
        let mut rng = StdRng::seed_from_u64(2);
        draw(&mut rec, &mut rng, Pattern::Circle, &segments(3), (50.0, 50.0), false);

        let begins = rec.commands.iter().filter(|c| matches!(c, Command::BeginPath)).count();
        let colours: Vec<_> = rec
            .commands
            .iter()
            .filter_map(|c| match c {
                Command::SetStrokeColor(color) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(begins, 3);
        assert_eq!(colours.len(), 3);
        assert!(colours.iter().all(|c| c.a == STROKE_ALPHA));
        // index 0 clamps to the start of the [1, n] range
        assert_eq!(colours[0], colours[1]);
    }
}
