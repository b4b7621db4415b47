//! Common utilities shared across CLI commands.

use std::fs;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use resvg::usvg;
use tiny_skia::{Pixmap, Transform};

use whorl::{GeneSet, Preset, Shell, SvgSurface};

use super::recipe::Recipe;

/// Default canvas, the size of the classic node export.
pub const DEFAULT_SIZE: u32 = 500;

/// Options every shell-producing command understands.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub width: u32,
    pub height: u32,
    pub seed: Option<u64>,
    pub preset: Option<Preset>,
    pub genes_path: Option<String>,
    /// Genes embedded in a recipe; win over every other source
    pub inline_genes: Option<GeneSet>,
    pub lofi: bool,
    pub background: Option<String>,
    pub stroke_width: f64,
    /// Children per generation, when a recipe sets it
    pub children: Option<usize>,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            seed: None,
            preset: None,
            genes_path: None,
            inline_genes: None,
            lofi: false,
            background: None,
            stroke_width: 1.0,
            children: None,
        }
    }
}

impl ShellOptions {
    /// Try to consume `args[*i]` (and its value) as a shared option.
    ///
    /// Returns `Ok(true)` when the flag was recognised; `i` is left on the
    /// last consumed argument, like the other parsers.
    pub fn parse_flag(&mut self, args: &[String], i: &mut usize) -> Result<bool> {
        match args[*i].as_str() {
            "-w" | "--width" => self.width = next_value(args, i)?,
            "--height" => self.height = next_value(args, i)?,
            "--size" => {
                let size: u32 = next_value(args, i)?;
                self.width = size;
                self.height = size;
            }
            "--seed" => self.seed = Some(next_value(args, i)?),
            "-p" | "--preset" => {
                let name: String = next_value(args, i)?;
                match Preset::from_name(&name) {
                    Some(preset) => self.preset = Some(preset),
                    None => bail!("Unknown preset: {}. Use 'whorl presets' to list available.", name),
                }
            }
            "-g" | "--genes" => self.genes_path = Some(next_value(args, i)?),
            "--lofi" => self.lofi = true,
            "--background" | "--bg" => self.background = Some(next_value(args, i)?),
            "--stroke-width" => self.stroke_width = next_value(args, i)?,
            "-r" | "--recipe" => {
                let path: String = next_value(args, i)?;
                Recipe::load(&path)?.apply(self)?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// RNG seeded from `--seed`, or from the OS.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Genes from a recipe or `--genes`, else from `--preset`, else fully random.
    pub fn genes(&self, rng: &mut StdRng) -> Result<GeneSet> {
        if let Some(genes) = &self.inline_genes {
            return Ok(genes.clone());
        }
        if let Some(path) = &self.genes_path {
            return load_genes(path);
        }
        Ok(match self.preset {
            Some(preset) => preset.sample(rng),
            None => whorl::random_genes(rng),
        })
    }

    /// Build the shell these options describe.
    pub fn build_shell(&self, rng: &mut StdRng) -> Result<Shell> {
        let genes = self.genes(rng)?;
        Shell::new(genes, self.width, self.height).context("Failed to generate shell")
    }

    /// Draw `shell` into a fresh SVG document.
    pub fn render_svg(&self, shell: &Shell, rng: &mut StdRng) -> Result<String> {
        let mut surface = SvgSurface::new(f64::from(self.width), f64::from(self.height))
            .with_stroke_width(self.stroke_width);
        if let Some(background) = &self.background {
            surface = surface.with_background(background);
        }

        let stats = shell.draw(&mut surface, rng, self.lofi).context("Failed to draw shell")?;
        tracing::info!(visited = stats.visited, total = stats.total, "rendered shell");
        Ok(surface.to_svg())
    }
}

/// Parse the value following a flag.
pub fn next_value<T>(args: &[String], i: &mut usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let flag = &args[*i];
    *i += 1;
    let Some(raw) = args.get(*i) else {
        bail!("Missing value for {}", flag);
    };
    raw.parse()
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {} ({})", flag, raw, e))
}

/// Read a gene snapshot written by `whorl genes` or `whorl render --json`.
pub fn load_genes(path: &str) -> Result<GeneSet> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse genes in {}", path))
}

/// Rasterise an SVG document to a PNG file.
pub fn write_png(svg: &str, path: &str, scale: f32) -> Result<()> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default()).context("Failed to parse generated SVG")?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height).context("Failed to create pixmap")?;

    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    pixmap.save_png(path).with_context(|| format!("Failed to write {}", path))?;
    Ok(())
}

/// Write `content` to `path`, or stdout when no path is given.
pub fn write_output(content: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path))?;
            eprintln!("Wrote: {}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_shared_flags() {
        let args = args(&["--size", "300", "--seed", "9", "--preset", "cone", "--lofi"]);
        let mut opts = ShellOptions::default();
        let mut i = 0;
        while i < args.len() {
            assert!(opts.parse_flag(&args, &mut i).unwrap());
            i += 1;
        }
        assert_eq!((opts.width, opts.height), (300, 300));
        assert_eq!(opts.seed, Some(9));
        assert_eq!(opts.preset, Some(Preset::Cone));
        assert!(opts.lofi);
    }

    #[test]
    fn unknown_flags_are_left_alone() {
        let args = args(&["--json"]);
        let mut opts = ShellOptions::default();
        assert!(!opts.parse_flag(&args, &mut 0).unwrap());
    }

    #[test]
    fn bad_values_are_errors() {
        let mut opts = ShellOptions::default();
        assert!(opts.parse_flag(&args(&["--width", "wide"]), &mut 0).is_err());
        assert!(opts.parse_flag(&args(&["--seed"]), &mut 0).is_err());
        assert!(opts.parse_flag(&args(&["--preset", "teapot"]), &mut 0).is_err());
    }

    #[test]
    fn same_seed_same_svg() {
        let opts = ShellOptions { seed: Some(21), ..ShellOptions::default() };
        let render = || {
            let mut rng = opts.rng();
            let shell = opts.build_shell(&mut rng).unwrap();
            opts.render_svg(&shell, &mut rng).unwrap()
        };
        assert_eq!(render(), render());
    }
}
