//! Shell recipes: YAML files describing a render.
//!
//! A recipe fixes the canvas, the seed and where the genes come from, so a
//! favourite shell (or family) can be regenerated later. Flags given after
//! `--recipe` on the command line override recipe values.
//!
//! ```yaml
//! canvas:
//!   width: 800
//!   height: 600
//! seed: 42
//! preset: rapa
//! lofi: false
//! children: 6
//! ```

use std::fs;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use whorl::{GeneSet, Preset};

use super::common::ShellOptions;

/// A complete recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Optional title, for humans
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub canvas: Option<Canvas>,

    #[serde(default)]
    pub seed: Option<u64>,

    /// Preset family name (see `whorl presets`)
    #[serde(default)]
    pub preset: Option<String>,

    /// Explicit genes; wins over `preset`
    #[serde(default)]
    pub genes: Option<GeneSet>,

    /// Path to a JSON gene snapshot; used when `genes` is absent
    #[serde(default)]
    pub genes_file: Option<String>,

    #[serde(default)]
    pub lofi: Option<bool>,

    #[serde(default)]
    pub background: Option<String>,

    #[serde(default)]
    pub stroke_width: Option<f64>,

    /// Children to breed (breed command only)
    #[serde(default)]
    pub children: Option<usize>,
}

/// Canvas configuration, in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Recipe {
    /// Load a recipe from a YAML file.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| format!("Failed to read recipe {}", path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse recipe {}", path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Copy every value this recipe sets into `opts`.
    pub fn apply(&self, opts: &mut ShellOptions) -> Result<()> {
        if let Some(name) = &self.name {
            tracing::info!(recipe = %name, "applying recipe");
        }
        if let Some(canvas) = self.canvas {
            if canvas.width == 0 || canvas.height == 0 {
                bail!("Recipe canvas must be non-empty, got {}x{}", canvas.width, canvas.height);
            }
            opts.width = canvas.width;
            opts.height = canvas.height;
        }
        if let Some(seed) = self.seed {
            opts.seed = Some(seed);
        }
        if let Some(name) = &self.preset {
            match Preset::from_name(name) {
                Some(preset) => opts.preset = Some(preset),
                None => bail!("Unknown preset in recipe: {}", name),
            }
        }
        if let Some(path) = &self.genes_file {
            opts.genes_path = Some(path.clone());
        }
        if let Some(genes) = &self.genes {
            opts.inline_genes = Some(genes.clone());
        }
        if let Some(lofi) = self.lofi {
            opts.lofi = lofi;
        }
        if let Some(background) = &self.background {
            opts.background = Some(background.clone());
        }
        if let Some(stroke_width) = self.stroke_width {
            opts.stroke_width = stroke_width;
        }
        if let Some(children) = self.children {
            opts.children = Some(children);
        }
        Ok(())
    }
}
