//! Random gene presets.
//!
//! Each preset is a shell family with its own ranges, tuned so that a
//! random draw looks pleasing most of the time. A gene is either fixed,
//! drawn from a continuous range, or drawn from an integer range.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::genes::{GeneSet, Handedness, MutSize, DEFAULT_MUT_PROB_GENE};
use crate::patterns::Pattern;

/// How a single numeric gene is sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneRange {
    Fixed(f64),
    /// Uniform over `[min, max]`.
    Float(f64, f64),
    /// Uniform over the integers in `[min, max]`.
    Int(i64, i64),
}

impl GeneRange {
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            GeneRange::Fixed(v) => v,
            GeneRange::Float(min, max) => rng.random_range(min..=max),
            GeneRange::Int(min, max) => rng.random_range(min..=max) as f64,
        }
    }

    /// Does `value` fall inside this range?
    #[cfg(test)]
    pub(crate) fn contains(&self, value: f64) -> bool {
        match *self {
            GeneRange::Fixed(v) => value == v,
            GeneRange::Float(min, max) => (min..=max).contains(&value),
            GeneRange::Int(min, max) => value.fract() == 0.0 && (min as f64..=max as f64).contains(&value),
        }
    }
}

/// Sampling ranges of one preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetRanges {
    pub pattern: Pattern,
    pub opening: GeneRange,
    pub displacement: GeneRange,
    pub shape: GeneRange,
    pub translation: GeneRange,
    pub coarsegraininess: GeneRange,
    pub reach: GeneRange,
    pub translation_gradient: GeneRange,
}

/// Named shell families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    BasicSnail,
    Babylon,
    Angel,
    Oyster,
    Bivalve,
    Cone,
    Scallop,
    Eloise,
    Gallaghers,
    Rapa,
    Lightning,
    Fig,
    RazorShell,
    JapaneseWonder,
}

impl Preset {
    /// The presets [`random_genes`] picks from.
    ///
    /// Babylon and Angel are left out: they come out too close to the
    /// bivalves.
    pub const SAMPLED: [Preset; 12] = [
        Preset::BasicSnail,
        Preset::Oyster,
        Preset::Bivalve,
        Preset::Cone,
        Preset::Scallop,
        Preset::Eloise,
        Preset::Gallaghers,
        Preset::Rapa,
        Preset::Lightning,
        Preset::Fig,
        Preset::RazorShell,
        Preset::JapaneseWonder,
    ];

    /// Get all presets, unsampled ones included.
    pub fn all() -> &'static [Preset] {
        &[
            Preset::BasicSnail,
            Preset::Babylon,
            Preset::Angel,
            Preset::Oyster,
            Preset::Bivalve,
            Preset::Cone,
            Preset::Scallop,
            Preset::Eloise,
            Preset::Gallaghers,
            Preset::Rapa,
            Preset::Lightning,
            Preset::Fig,
            Preset::RazorShell,
            Preset::JapaneseWonder,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::BasicSnail => "basic-snail",
            Preset::Babylon => "babylon",
            Preset::Angel => "angel",
            Preset::Oyster => "oyster",
            Preset::Bivalve => "bivalve",
            Preset::Cone => "cone",
            Preset::Scallop => "scallop",
            Preset::Eloise => "eloise",
            Preset::Gallaghers => "gallaghers",
            Preset::Rapa => "rapa",
            Preset::Lightning => "lightning",
            Preset::Fig => "fig",
            Preset::RazorShell => "razor-shell",
            Preset::JapaneseWonder => "japanese-wonder",
        }
    }

    /// Parse preset from string.
    pub fn from_name(name: &str) -> Option<Preset> {
        match name.to_lowercase().as_str() {
            "basic-snail" | "snail" => Some(Preset::BasicSnail),
            "babylon" => Some(Preset::Babylon),
            "angel" => Some(Preset::Angel),
            "oyster" => Some(Preset::Oyster),
            "bivalve" | "brachiopod" => Some(Preset::Bivalve),
            "cone" => Some(Preset::Cone),
            "scallop" => Some(Preset::Scallop),
            "eloise" => Some(Preset::Eloise),
            "gallaghers" => Some(Preset::Gallaghers),
            "rapa" => Some(Preset::Rapa),
            "lightning" => Some(Preset::Lightning),
            "fig" | "tun" => Some(Preset::Fig),
            "razor-shell" | "razor" => Some(Preset::RazorShell),
            "japanese-wonder" | "wonder" => Some(Preset::JapaneseWonder),
            _ => None,
        }
    }

    /// Whether [`random_genes`] can pick this preset.
    pub fn is_sampled(&self) -> bool {
        Self::SAMPLED.contains(self)
    }

    pub fn ranges(&self) -> PresetRanges {
        use GeneRange::{Fixed, Float, Int};

        match self {
            Preset::BasicSnail => PresetRanges {
                pattern: Pattern::Circle,
                opening: Float(1.5, 6.5),
                displacement: Float(0.0, 0.1),
                shape: Float(0.8, 1.8),
                translation: Float(0.0, 4.0),
                coarsegraininess: Int(4, 8),
                reach: Float(3.0, 5.0),
                translation_gradient: Fixed(1.0),
            },
            Preset::Babylon => PresetRanges {
                pattern: Pattern::Babylon,
                opening: Float(100.0, 1000.0),
                displacement: Float(0.0, 0.25),
                shape: Float(2.0, 5.0),
                translation: Float(0.0, 0.3),
                coarsegraininess: Float(1.5, 3.0),
                reach: Int(2, 3),
                translation_gradient: Int(1, 8),
            },
            Preset::Angel => PresetRanges {
                pattern: Pattern::Angel,
                opening: Float(100.0, 1000.0),
                displacement: Float(0.0, 0.25),
                shape: Float(2.0, 5.0),
                translation: Float(0.0, 0.3),
                coarsegraininess: Float(1.0, 2.5),
                reach: Int(2, 3),
                translation_gradient: Int(1, 8),
            },
            Preset::Oyster => PresetRanges {
                pattern: Pattern::Oyster,
                opening: Float(100.0, 1000.0),
                displacement: Float(0.0, 0.2),
                shape: Float(2.0, 5.0),
                translation: Float(0.0, 1.5),
                coarsegraininess: Float(3.0, 4.0),
                reach: Float(2.0, 3.0),
                translation_gradient: Float(0.5, 1.5),
            },
            Preset::Bivalve => PresetRanges {
                pattern: Pattern::Circle,
                opening: Float(20.0, 1000.0),
                displacement: Float(0.0, 0.25),
                shape: Float(1.5, 4.0),
                translation: Float(0.0, 0.3),
                coarsegraininess: Float(1.5, 3.0),
                reach: Float(2.2, 4.0),
                translation_gradient: Float(1.0, 5.0),
            },
            Preset::Cone => PresetRanges {
                pattern: Pattern::Whelk,
                opening: Float(1.3, 5.0),
                displacement: Float(0.0, 0.5),
                shape: Float(1.0, 5.0),
                translation: Float(2.5, 4.5),
                coarsegraininess: Float(2.0, 5.0),
                reach: Float(2.0, 7.0),
                translation_gradient: Fixed(1.0),
            },
            Preset::Scallop => PresetRanges {
                pattern: Pattern::Scallop,
                opening: Float(100.0, 1000.0),
                displacement: Fixed(0.0),
                shape: Float(1.0, 6.0),
                translation: Float(0.0, 1.0),
                coarsegraininess: Float(2.0, 3.5),
                reach: Fixed(3.0),
                translation_gradient: Float(0.0, 2.0),
            },
            Preset::Eloise => PresetRanges {
                pattern: Pattern::Eloise,
                opening: Float(1.3, 2.5),
                displacement: Float(0.0, 0.3),
                shape: Float(1.5, 2.0),
                translation: Float(1.5, 3.0),
                coarsegraininess: Float(2.5, 5.0),
                reach: Float(2.0, 5.0),
                translation_gradient: Float(1.0, 1.5),
            },
            Preset::Gallaghers => PresetRanges {
                pattern: Pattern::Gallaghers,
                opening: Float(1.4, 2.0),
                displacement: Float(0.0, 0.1),
                shape: Float(1.4, 2.0),
                translation: Float(2.0, 6.0),
                coarsegraininess: Float(3.0, 5.0),
                reach: Float(3.0, 6.0),
                translation_gradient: Float(0.5, 1.0),
            },
            Preset::Rapa => PresetRanges {
                pattern: Pattern::Rapa,
                opening: Float(1.4, 6.0),
                displacement: Float(0.0, 0.12),
                shape: Float(1.8, 2.7),
                translation: Float(0.1, 2.6),
                coarsegraininess: Float(3.0, 6.0),
                reach: Fixed(9.0),
                translation_gradient: Float(0.8, 1.5),
            },
            Preset::Lightning => PresetRanges {
                pattern: Pattern::Lightning,
                opening: Float(1.4, 2.2),
                displacement: Float(0.0, 0.3),
                shape: Float(2.5, 5.0),
                translation: Float(2.0, 4.5),
                coarsegraininess: Float(3.0, 6.0),
                reach: Float(2.0, 6.0),
                translation_gradient: Float(0.8, 1.2),
            },
            Preset::Fig => PresetRanges {
                pattern: Pattern::Tun,
                opening: Float(1.5, 4.0),
                displacement: Float(0.0, 0.1),
                shape: Float(2.0, 4.0),
                translation: Float(0.0, 4.0),
                coarsegraininess: Float(2.0, 4.0),
                reach: Float(3.0, 8.0),
                translation_gradient: Float(0.9, 1.1),
            },
            Preset::RazorShell => PresetRanges {
                pattern: Pattern::Razor,
                opening: Float(100.0, 1000.0),
                displacement: Fixed(-0.15),
                shape: Float(4.0, 6.0),
                translation: Float(4.0, 6.2),
                coarsegraininess: Float(2.0, 3.0),
                reach: Float(1.0, 3.0),
                translation_gradient: Fixed(1.0),
            },
            Preset::JapaneseWonder => PresetRanges {
                pattern: Pattern::Wonder,
                opening: Float(1.4, 2.0),
                displacement: Float(-0.2, 0.05),
                shape: Float(1.0, 3.0),
                translation: Float(3.5, 6.0),
                coarsegraininess: Float(2.0, 5.0),
                reach: Float(6.0, 10.0),
                translation_gradient: Float(0.9, 1.2),
            },
        }
    }

    /// Draw a gene set from this preset's ranges.
    ///
    /// Mutation parameters are the defaults; handedness is a fair coin.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> GeneSet {
        let ranges = self.ranges();

        GeneSet {
            pattern: ranges.pattern.name().to_string(),
            opening: ranges.opening.sample(rng),
            displacement: ranges.displacement.sample(rng),
            shape: ranges.shape.sample(rng),
            translation: ranges.translation.sample(rng),
            coarsegraininess: ranges.coarsegraininess.sample(rng),
            reach: ranges.reach.sample(rng),
            handedness: if rng.random_bool(0.5) { Handedness::Right } else { Handedness::Left },
            translation_gradient: ranges.translation_gradient.sample(rng),
            mut_prob_gene: DEFAULT_MUT_PROB_GENE,
            mut_size: MutSize::default(),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick one of the sampled presets uniformly and draw genes from it.
pub fn random_genes<R: Rng>(rng: &mut R) -> GeneSet {
    random_preset(rng).sample(rng)
}

/// Pick one of the sampled presets uniformly.
pub fn random_preset<R: Rng>(rng: &mut R) -> Preset {
    *Preset::SAMPLED.choose(rng).unwrap_or(&Preset::BasicSnail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_in_preset_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for &preset in Preset::all() {
            let ranges = preset.ranges();
            for _ in 0..50 {
                let genes = preset.sample(&mut rng);
                assert_eq!(genes.pattern, ranges.pattern.name());
                assert!(ranges.opening.contains(genes.opening), "{} opening {}", preset, genes.opening);
                assert!(ranges.displacement.contains(genes.displacement));
                assert!(ranges.shape.contains(genes.shape));
                assert!(ranges.translation.contains(genes.translation));
                assert!(ranges.coarsegraininess.contains(genes.coarsegraininess));
                assert!(ranges.reach.contains(genes.reach));
                assert!(ranges.translation_gradient.contains(genes.translation_gradient));
                assert_eq!(genes.validate(), Ok(()), "{} produced invalid genes", preset);
            }
        }
    }

    #[test]
    fn integer_ranges_give_whole_numbers() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let genes = Preset::BasicSnail.sample(&mut rng);
            assert_eq!(genes.coarsegraininess.fract(), 0.0);
            assert!((4.0..=8.0).contains(&genes.coarsegraininess));
        }
    }

    #[test]
    fn random_genes_cover_sampled_presets_only() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            let preset = random_preset(&mut rng);
            assert!(preset.is_sampled());
            seen.insert(preset);
        }
        assert_eq!(seen.len(), 12);
        assert!(!Preset::Babylon.is_sampled());
        assert!(!Preset::Angel.is_sampled());
    }

    #[test]
    fn both_handednesses_appear() {
        let mut rng = StdRng::seed_from_u64(5);
        let lefts = (0..200)
            .filter(|_| random_genes(&mut rng).handedness == Handedness::Left)
            .count();
        assert!(lefts > 0 && lefts < 200);
    }

    #[test]
    fn preset_patterns_resolve() {
        for &preset in Preset::all() {
            assert!(Pattern::from_name(preset.ranges().pattern.name()).is_some());
            assert_eq!(Preset::from_name(preset.name()), Some(preset));
        }
    }

    #[test]
    fn random_genes_use_default_mutation_params() {
        let mut rng = StdRng::seed_from_u64(1);
        let genes = random_genes(&mut rng);
        assert_eq!(genes.mut_prob_gene, 10);
        assert_eq!(genes.mut_size, MutSize::default());
    }
}
