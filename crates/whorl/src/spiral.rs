//! Spiral generator: genes in, ordered segment boxes out.
//!
//! The shell is modeled as a spiraling tube. Walking the spiral from its
//! outermost angle (`reach` full turns) back to zero in steps of
//! `coarsegraininess` degrees, each stop yields the box the tube's
//! cross-section occupies there. A logarithmic contraction shrinks the
//! box toward the apex, which is what produces the depth effect.
//!
//! This module only produces the raw boxes in canvas pixels; centring and
//! fitting to the canvas happen in [`crate::layout`].

use std::f64::consts::PI;

use crate::error::ShellError;
use crate::genes::GeneSet;
use crate::geometry::{round_half_up, Point, Segment};

/// Overall size factor of the classic figure.
const SIZE: f64 = 0.8;
/// Base tube radius before displacement splits it.
const BASE_RADIUS: f64 = 100.0;
/// Historical scale constant shared by the offsets and radii.
const SCALE: f64 = 1.088;
/// Most segments reserved up front; dedup usually keeps far fewer.
const PREALLOC_LIMIT: usize = 4096;

/// Iterator over every sampled box of the spiral, duplicates included.
///
/// ## Rust Lesson #30: Implementing Iterator
///
/// Implementing `next()` is enough to get `.count()`, `.map()`, `.fold()`
/// and friends for free. The sampler owns all of its state, so it can be
/// consumed lazily or collected.
#[derive(Debug, Clone)]
pub struct SpiralSampler {
    handedness: f64,
    translation: f64,
    translation_gradient: f64,
    ln_opening: f64,
    shape: f64,
    step: f64,
    mnx: f64,
    mny: f64,
    rad1: f64,
    rad2: f64,
    start: f64,
    m: f64,
}

impl SpiralSampler {
    /// Prepare the sampling loop around `centre`.
    ///
    /// Fails fast on genes that would make the loop undefined or endless.
    pub fn new(genes: &GeneSet, centre: Point) -> Result<Self, ShellError> {
        genes.validate()?;

        let denom = 136.0 * SIZE;
        let mnx = round_half_up(-(100.0 / denom) * centre.x * SCALE);
        let mny = round_half_up(-(100.0 / denom) * centre.y * SCALE);
        let rad1 = SCALE * (BASE_RADIUS + BASE_RADIUS * genes.displacement) / 2.0;
        let rad2 = SCALE * (BASE_RADIUS - BASE_RADIUS * genes.displacement) / 2.0;
        let start = genes.reach * 360.0;

        Ok(Self {
            handedness: genes.handedness.sign(),
            translation: genes.translation,
            translation_gradient: genes.translation_gradient,
            ln_opening: genes.opening.ln(),
            shape: genes.shape,
            step: genes.coarsegraininess,
            mnx,
            mny,
            rad1,
            rad2,
            start,
            m: start,
        })
    }

    /// Upper bound on the number of boxes this sampler yields.
    pub fn max_samples(&self) -> usize {
        ((self.start / self.step).ceil() as usize).saturating_add(1)
    }

    /// Box at angle `m` degrees from the apex.
    fn sample(&self, m: f64) -> Segment {
        // easing of the translation across the sweep
        let p = (self.start - (self.start - m) * (1.0 - self.translation_gradient)) / self.start;
        let t = self.translation * p;

        let i = m / 360.0;
        let fw = (-i * self.ln_opening).exp();
        let grunge = fw * (2.0 * PI * i).cos();

        let xc = self.handedness * (self.rad1 * grunge);
        let yc = -self.rad1 * t * (1.0 - fw);
        let xr = self.handedness * (self.rad2 * grunge);
        // negative so the shell stands apex up
        let yr = -self.rad2 * fw * self.shape;

        let top = round_half_up(yc - yr - self.mny);
        let left = round_half_up(xc - xr - self.mnx);
        let bottom = round_half_up(yc + yr - self.mny);
        let right = round_half_up(xc + xr - self.mnx);

        Segment::new(left, bottom, right, top)
    }
}

impl Iterator for SpiralSampler {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.m < 0.0 {
            return None;
        }
        let segment = self.sample(self.m);
        self.m -= self.step;
        Some(segment)
    }
}

/// Generate the raw, de-duplicated segment sequence for `genes`.
///
/// Tight inner whorls round to the same pixel box many times over; a box
/// is only kept when one of its corners differs from the previously kept
/// box.
pub fn generate_segments(genes: &GeneSet, centre: Point) -> Result<Vec<Segment>, ShellError> {
    let sampler = SpiralSampler::new(genes, centre)?;
    let bound = sampler.max_samples();

    let mut segments: Vec<Segment> = Vec::with_capacity(bound.min(PREALLOC_LIMIT));
    let mut iterations = 0usize;
    for segment in sampler {
        iterations += 1;
        if segments.last() != Some(&segment) {
            segments.push(segment);
        }
    }

    if segments.is_empty() {
        return Err(ShellError::EmptyGeometry);
    }

    tracing::debug!(iterations, segments = segments.len(), "sampled spiral");
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genes::{snail, Handedness};

    fn centre() -> Point {
        Point::new(250.0, 250.0)
    }

    #[test]
    fn sampler_terminates_within_bound() {
        let genes = snail();
        let sampler = SpiralSampler::new(&genes, centre()).unwrap();
        let bound = sampler.max_samples();
        assert_eq!(bound, 217);
        // 1080 / 5 = 216 steps plus the m = 0 sample
        assert_eq!(sampler.count(), 217);
    }

    #[test]
    fn fractional_steps_stay_within_bound() {
        let mut genes = snail();
        genes.coarsegraininess = 7.3;
        genes.reach = 2.35;
        let sampler = SpiralSampler::new(&genes, centre()).unwrap();
        let bound = sampler.max_samples();
        assert!(sampler.count() <= bound);
    }

    #[test]
    fn first_box_matches_hand_computation() {
        // m = 1080: i = 3, fw = 1/8, cos(6pi) = 1, p = 1, t = 1
        // rad1 = rad2 = 54.4, mnx = mny = round(-250 * 100 / 108.8 * 1.088) = -250
        // xc = xr = 6.8, yc = -54.4 * 7/8 = -47.6, yr = -6.8
        let first = SpiralSampler::new(&snail(), centre()).unwrap().next().unwrap();
        assert_eq!(first, Segment::new(250.0, 196.0, 264.0, 209.0));
    }

    #[test]
    fn consecutive_segments_differ() {
        let segments = generate_segments(&snail(), centre()).unwrap();
        assert!(!segments.is_empty());
        for pair in segments.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn duplicates_are_collapsed() {
        // a huge opening shrinks the inner whorls to a single pixel box
        let mut genes = snail();
        genes.opening = 900.0;
        let raw = SpiralSampler::new(&genes, centre()).unwrap().count();
        let kept = generate_segments(&genes, centre()).unwrap().len();
        assert!(kept < raw, "expected collapsing, kept {} of {}", kept, raw);
    }

    #[test]
    fn handedness_mirrors_horizontally() {
        let right = generate_segments(&snail(), centre()).unwrap();
        let mut genes = snail();
        genes.handedness = Handedness::Left;
        let left = generate_segments(&genes, centre()).unwrap();

        let first_right = right[0];
        let first_left = left[0];
        // mirrored about x = 250
        assert_eq!(first_left.start_x, 500.0 - first_right.start_x);
        assert_eq!(first_left.end_x, 500.0 - first_right.end_x);
        assert_eq!(first_left.start_y, first_right.start_y);
    }

    #[test]
    fn oversized_sweeps_fail_instead_of_hanging() {
        for (reach, step) in [(1e7, 1e-9), (1e300, 1.0)] {
            let mut genes = snail();
            genes.reach = reach;
            genes.coarsegraininess = step;
            assert!(matches!(
                generate_segments(&genes, centre()),
                Err(ShellError::InvalidGene { gene: "coarsegraininess", .. })
            ));
        }
    }

    #[test]
    fn invalid_genes_fail_before_sampling() {
        let mut genes = snail();
        genes.coarsegraininess = 0.0;
        assert!(matches!(
            generate_segments(&genes, centre()),
            Err(ShellError::InvalidGene { gene: "coarsegraininess", .. })
        ));
    }
}
