//! Mutation of gene sets.
//!
//! Each gene rolls against `mut_prob_gene` percent and, on a hit, moves by
//! its own mutation size. Handedness and pattern ignore `mut_prob_gene`
//! and use small fixed rates instead, so they change rarely.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::genes::GeneSet;
use crate::patterns::Pattern;

/// Step applied to `ln(opening)`.
const OPENING_LOG_STEP: f64 = 0.4;
/// Cap on `ln(opening)` after a step.
const OPENING_LOG_MAX: f64 = 20.0;
/// Percent chance to flip handedness.
const HANDEDNESS_FLIP_PERCENT: u32 = 1;
/// Percent chance to swap in a random registry pattern.
const PATTERN_SWAP_PERCENT: u32 = 5;

/// Move `opening` one step in log space.
///
/// Opening is a logarithmic gene, so it mutates multiplicatively. The
/// result never drops below 1.
pub fn mutate_opening(opening: f64, sign: f64) -> f64 {
    let logged = (opening.ln() + OPENING_LOG_STEP * sign).min(OPENING_LOG_MAX);
    logged.exp().max(1.0)
}

/// A fair `-1.0` / `+1.0` draw.
fn random_sign<R: Rng>(rng: &mut R) -> f64 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Roll a percentage.
fn roll<R: Rng>(rng: &mut R, percent: u32) -> bool {
    rng.random_range(0..100) < percent
}

/// Produce a mutated copy of `parent`. The parent is untouched.
pub fn mutate<R: Rng>(parent: &GeneSet, rng: &mut R) -> GeneSet {
    let mut child = parent.clone();
    let prob = u32::from(child.mut_prob_gene);
    let size = child.mut_size;

    if roll(rng, prob) {
        child.opening = mutate_opening(child.opening, random_sign(rng));
        tracing::trace!(opening = child.opening, "mutated opening");
    }

    if roll(rng, prob) {
        child.displacement += rng.random_range(-2.0_f64..=2.0) * size.displacement;
        child.displacement = child.displacement.clamp(0.0, 1.0);
        tracing::trace!(displacement = child.displacement, "mutated displacement");
    }

    if roll(rng, prob) {
        child.translation += rng.random_range(-2.0_f64..=2.0) * size.translation;
        tracing::trace!(translation = child.translation, "mutated translation");
    }

    if roll(rng, HANDEDNESS_FLIP_PERCENT) {
        child.handedness = child.handedness.flipped();
        tracing::trace!(handedness = ?child.handedness, "flipped handedness");
    }

    if roll(rng, prob) {
        child.shape += random_sign(rng) * size.shape;
        tracing::trace!(shape = child.shape, "mutated shape");
    }

    if roll(rng, prob) {
        child.reach += random_sign(rng) * size.reach;
        tracing::trace!(reach = child.reach, "mutated reach");
    }

    if roll(rng, PATTERN_SWAP_PERCENT) {
        if let Some(pattern) = Pattern::registry().choose(rng) {
            child.pattern = pattern.name().to_string();
            tracing::trace!(pattern = %pattern, "swapped pattern");
        }
    }

    child
}
