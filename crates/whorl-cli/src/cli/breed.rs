//! Breed a family of shells.
//!
//! One parent is generated as for `render`; every shell of the newest
//! generation then breeds `--children` mutated offspring, `--generations`
//! times over. Each shell is written to its own SVG, named after its
//! place in the family (`shell.svg`, `shell-2.svg`, `shell-2-1.svg`, ...),
//! and the family's genes are printed as a JSON tree.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;

use whorl::Shell;

use super::common::{next_value, ShellOptions};

const DEFAULT_CHILDREN: usize = 4;
const DEFAULT_OUT_DIR: &str = "shells";

/// Execute the breed command.
pub fn cmd_breed(args: &[String]) -> Result<()> {
    let mut opts = ShellOptions::default();
    let mut children: Option<usize> = None;
    let mut generations = 1_usize;
    let mut out_dir = DEFAULT_OUT_DIR.to_string();

    let mut i = 0;
    while i < args.len() {
        if !opts.parse_flag(args, &mut i)? {
            match args[i].as_str() {
                "-n" | "--children" => children = Some(next_value(args, &mut i)?),
                "--generations" => generations = next_value(args, &mut i)?,
                "-o" | "--out-dir" => out_dir = next_value(args, &mut i)?,
                other => bail!("Unknown breed option: {}", other),
            }
        }
        i += 1;
    }
    let children = children.or(opts.children).unwrap_or(DEFAULT_CHILDREN);

    let out_dir = Path::new(&out_dir);
    fs::create_dir_all(out_dir).with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut rng = opts.rng();
    let mut root = opts.build_shell(&mut rng)?;
    write_shell(&opts, &root, &mut rng, out_dir, "shell")?;

    let written = 1 + breed_family(&opts, &mut root, &mut rng, children, generations, out_dir, "shell")?;
    tracing::info!(shells = written, dir = %out_dir.display(), "family written");

    println!("{}", serde_json::to_string_pretty(&root.lineage())?);
    Ok(())
}

/// Breed `children` offspring under `shell`, then recurse into them.
///
/// Returns the number of shells written.
fn breed_family(
    opts: &ShellOptions,
    shell: &mut Shell,
    rng: &mut StdRng,
    children: usize,
    generations: usize,
    out_dir: &Path,
    label: &str,
) -> Result<usize> {
    if generations == 0 {
        return Ok(0);
    }

    for _ in 0..children {
        if let Err(err) = shell.breed(rng) {
            tracing::warn!(parent = label, %err, "mutation produced an unusable shell, skipping");
        }
    }

    let mut written = 0;
    for index in 0..shell.children().len() {
        let Some(child) = shell.child_mut(index) else { continue };
        let child_label = format!("{}-{}", label, index + 1);
        write_shell(opts, child, rng, out_dir, &child_label)?;
        written += 1 + breed_family(opts, child, rng, children, generations - 1, out_dir, &child_label)?;
    }
    Ok(written)
}

fn write_shell(opts: &ShellOptions, shell: &Shell, rng: &mut StdRng, out_dir: &Path, label: &str) -> Result<()> {
    let svg = opts.render_svg(shell, rng)?;
    let path = out_dir.join(format!("{}.svg", label));
    fs::write(&path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
    eprintln!("Wrote: {}", path.display());
    Ok(())
}
