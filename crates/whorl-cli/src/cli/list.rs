//! Listing commands: patterns, presets and random genes.

use anyhow::{bail, Result};

use whorl::{Pattern, Preset};

use super::common::ShellOptions;

pub fn cmd_patterns() {
    println!("Available patterns:");
    for pattern in Pattern::all() {
        match pattern.shape() {
            Some(shape) => println!("  {:<12} {:>3} points", pattern.name(), shape.points.len()),
            None => println!("  {:<12} ellipse", pattern.name()),
        }
    }
}

pub fn cmd_presets() {
    println!("Available presets:");
    for preset in Preset::all() {
        let sampled = if preset.is_sampled() { "" } else { " (explicit only)" };
        println!("  {:<16} {}{}", preset.name(), preset.ranges().pattern.name(), sampled);
    }
}

/// Print a random gene set as JSON, ready for `--genes`.
pub fn cmd_genes(args: &[String]) -> Result<()> {
    let mut opts = ShellOptions::default();

    let mut i = 0;
    while i < args.len() {
        if !opts.parse_flag(args, &mut i)? {
            bail!("Unknown genes option: {}", args[i]);
        }
        i += 1;
    }

    let mut rng = opts.rng();
    let genes = opts.genes(&mut rng)?;
    println!("{}", serde_json::to_string_pretty(&genes)?);
    Ok(())
}
