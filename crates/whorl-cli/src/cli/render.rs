//! Render a single shell.

use anyhow::{bail, Result};

use super::common::{next_value, write_output, write_png, ShellOptions};

/// Execute the render command.
pub fn cmd_render(args: &[String]) -> Result<()> {
    let mut opts = ShellOptions::default();
    let mut output_path: Option<String> = None;
    let mut png_path: Option<String> = None;
    let mut png_scale = 1.0_f32;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        if !opts.parse_flag(args, &mut i)? {
            match args[i].as_str() {
                "-o" | "--output" => output_path = Some(next_value(args, &mut i)?),
                "--png" => png_path = Some(next_value(args, &mut i)?),
                "--png-scale" => png_scale = next_value(args, &mut i)?,
                "--json" => json = true,
                other => bail!("Unknown render option: {}", other),
            }
        }
        i += 1;
    }
    if png_scale <= 0.0 {
        bail!("--png-scale must be positive, got {}", png_scale);
    }

    let mut rng = opts.rng();
    let shell = opts.build_shell(&mut rng)?;
    let genes = shell.genes();
    tracing::info!(
        pattern = %genes.pattern,
        segments = shell.segments().len(),
        width = opts.width,
        height = opts.height,
        "generated shell"
    );

    let svg = opts.render_svg(&shell, &mut rng)?;

    if let Some(path) = &png_path {
        write_png(&svg, path, png_scale)?;
        eprintln!("Wrote: {}", path);
    }

    if json {
        // genes go to stdout; the drawing only where asked for
        println!("{}", serde_json::to_string_pretty(&genes)?);
        if let Some(path) = output_path.as_deref() {
            write_output(&svg, Some(path))?;
        }
    } else if output_path.is_some() || png_path.is_none() {
        write_output(&svg, output_path.as_deref())?;
    }

    Ok(())
}
