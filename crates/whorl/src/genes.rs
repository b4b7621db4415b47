//! The heritable parameter set of a shell.
//!
//! The genes roughly follow what Dawkins called flare, spire and verm in
//! *Climbing Mount Improbable*:
//! - `opening` (flare): how fast the tube's diameter grows per turn
//! - `displacement` (verm): how far apart the whorls sit
//! - `translation` (spire): how much the tube piles onto itself
//!
//! plus modifiers for sampling density, number of turns, mirroring,
//! cross-section distortion and translation easing. Mutation rate and
//! size travel with the genes so that children inherit them.

use serde::{Deserialize, Serialize};

use crate::error::ShellError;
use crate::patterns::Pattern;

/// Mirrors the spiral horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Handedness {
    /// Serialized as `1`.
    Right,
    /// Serialized as `-1`.
    Left,
}

impl Handedness {
    /// `+1.0` or `-1.0`, the multiplier applied to horizontal geometry.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Handedness::Right => 1.0,
            Handedness::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Handedness::Right => Handedness::Left,
            Handedness::Left => Handedness::Right,
        }
    }
}

impl TryFrom<i8> for Handedness {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Handedness::Right),
            -1 => Ok(Handedness::Left),
            other => Err(format!("handedness must be 1 or -1, got {}", other)),
        }
    }
}

impl From<Handedness> for i8 {
    fn from(value: Handedness) -> Self {
        match value {
            Handedness::Right => 1,
            Handedness::Left => -1,
        }
    }
}

/// Per-gene mutation magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutSize {
    pub displacement: f64,
    pub translation: f64,
    pub shape: f64,
    pub reach: f64,
}

impl Default for MutSize {
    fn default() -> Self {
        Self {
            displacement: 0.2,
            translation: 0.8,
            shape: 1.0,
            reach: 1.0,
        }
    }
}

/// Default per-gene mutation probability, in percent.
pub const DEFAULT_MUT_PROB_GENE: u8 = 10;

/// The heritable genes of one shell.
///
/// `pattern` stays a plain name so that snapshots loaded from JSON can
/// carry anything; it is resolved against the registry at draw time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneSet {
    pub pattern: String,
    pub opening: f64,
    pub displacement: f64,
    pub translation: f64,
    pub translation_gradient: f64,
    pub coarsegraininess: f64,
    pub reach: f64,
    pub handedness: Handedness,
    pub shape: f64,
    #[serde(default = "default_mut_prob_gene")]
    pub mut_prob_gene: u8,
    #[serde(default)]
    pub mut_size: MutSize,
}

/// Most spiral samples one gene set may ask for (`reach * 360 / coarsegraininess`).
pub const MAX_SAMPLES: f64 = 1e6;

fn default_mut_prob_gene() -> u8 {
    DEFAULT_MUT_PROB_GENE
}

impl GeneSet {
    /// Reject genes the spiral generator cannot run on.
    ///
    /// `opening`, `coarsegraininess` and `reach` must be strictly
    /// positive: a non-positive opening has no logarithm, a non-positive
    /// step never terminates, and a non-positive reach samples nothing.
    /// The sweep must also stay under [`MAX_SAMPLES`] steps, and each step
    /// must actually move the sweep angle.
    /// Every other numeric gene only has to be finite.
    pub fn validate(&self) -> Result<(), ShellError> {
        let positive = [
            ("opening", self.opening),
            ("coarsegraininess", self.coarsegraininess),
            ("reach", self.reach),
        ];
        for (gene, value) in positive {
            if !value.is_finite() {
                return Err(ShellError::InvalidGene { gene, value, reason: "must be finite" });
            }
            if value <= 0.0 {
                return Err(ShellError::InvalidGene { gene, value, reason: "must be positive" });
            }
        }

        let start = self.reach * 360.0;
        let step = self.coarsegraininess;
        if start / step > MAX_SAMPLES || start - step == start {
            return Err(ShellError::InvalidGene {
                gene: "coarsegraininess",
                value: step,
                reason: "too fine for reach, the sweep would not finish",
            });
        }

        let finite = [
            ("displacement", self.displacement),
            ("translation", self.translation),
            ("translationGradient", self.translation_gradient),
            ("shape", self.shape),
        ];
        for (gene, value) in finite {
            if !value.is_finite() {
                return Err(ShellError::InvalidGene { gene, value, reason: "must be finite" });
            }
        }

        if self.mut_prob_gene > 100 {
            return Err(ShellError::InvalidGene {
                gene: "mutProbGene",
                value: f64::from(self.mut_prob_gene),
                reason: "must be a percentage",
            });
        }

        Ok(())
    }

    /// Resolve the pattern name against the registry.
    pub fn resolve_pattern(&self) -> Result<Pattern, ShellError> {
        Pattern::from_name(&self.pattern).ok_or_else(|| ShellError::UnknownPattern(self.pattern.clone()))
    }
}

/// The reference gene set used across the unit tests: a plain circle
/// snail on three turns.
#[cfg(test)]
pub(crate) fn snail() -> GeneSet {
    GeneSet {
        pattern: "circle".into(),
        opening: 2.0,
        displacement: 0.0,
        translation: 1.0,
        translation_gradient: 1.0,
        coarsegraininess: 5.0,
        reach: 3.0,
        handedness: Handedness::Right,
        shape: 1.0,
        mut_prob_gene: DEFAULT_MUT_PROB_GENE,
        mut_size: MutSize::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_genes_pass() {
        assert_eq!(snail().validate(), Ok(()));
    }

    #[test]
    fn non_positive_loop_genes_are_rejected() {
        let mut genes = snail();
        genes.opening = 0.0;
        assert!(matches!(genes.validate(), Err(ShellError::InvalidGene { gene: "opening", .. })));

        let mut genes = snail();
        genes.coarsegraininess = -5.0;
        assert!(matches!(genes.validate(), Err(ShellError::InvalidGene { gene: "coarsegraininess", .. })));

        let mut genes = snail();
        genes.reach = 0.0;
        assert!(matches!(genes.validate(), Err(ShellError::InvalidGene { gene: "reach", .. })));

        let mut genes = snail();
        genes.translation = f64::NAN;
        assert!(matches!(genes.validate(), Err(ShellError::InvalidGene { gene: "translation", .. })));
    }

    #[test]
    fn endless_sweeps_are_rejected() {
        // more samples than any shell needs
        let mut genes = snail();
        genes.reach = 1e7;
        genes.coarsegraininess = 1e-9;
        assert!(matches!(genes.validate(), Err(ShellError::InvalidGene { gene: "coarsegraininess", .. })));

        // the step vanishes next to the start angle
        let mut genes = snail();
        genes.reach = 1e300;
        genes.coarsegraininess = 1.0;
        assert_eq!(genes.reach * 360.0 - 1.0, genes.reach * 360.0);
        assert!(matches!(genes.validate(), Err(ShellError::InvalidGene { gene: "coarsegraininess", .. })));

        // dense but bounded sweeps are still fine
        let mut genes = snail();
        genes.reach = 10.0;
        genes.coarsegraininess = 0.01;
        assert!(genes.reach * 360.0 / genes.coarsegraininess <= MAX_SAMPLES);
        assert_eq!(genes.validate(), Ok(()));
    }

    #[test]
    fn unknown_pattern_is_reported() {
        let mut genes = snail();
        genes.pattern = "nonexistent".into();
        assert_eq!(genes.resolve_pattern(), Err(ShellError::UnknownPattern("nonexistent".into())));
    }

    #[test]
    fn serializes_with_original_keys() {
        let mut genes = snail();
        genes.handedness = Handedness::Left;
        let json = serde_json::to_value(&genes).unwrap();
        assert_eq!(json["translationGradient"], 1.0);
        assert_eq!(json["mutProbGene"], 10);
        assert_eq!(json["mutSize"]["translation"], 0.8);
        assert_eq!(json["handedness"], -1);

        let back: GeneSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, genes);
    }

    #[test]
    fn bad_handedness_fails_to_parse() {
        let mut json = serde_json::to_value(snail()).unwrap();
        json["handedness"] = serde_json::json!(0);
        assert!(serde_json::from_value::<GeneSet>(json).is_err());
    }

    #[test]
    fn mutation_params_default_when_absent() {
        let mut json = serde_json::to_value(snail()).unwrap();
        let obj = json.as_object_mut().unwrap();
        obj.remove("mutProbGene");
        obj.remove("mutSize");
        let genes: GeneSet = serde_json::from_value(json).unwrap();
        assert_eq!(genes.mut_prob_gene, 10);
        assert_eq!(genes.mut_size, MutSize::default());
    }
}
