//! whorl - seashell spirals on the command line
//!
//! Usage:
//!   whorl render [options]     Generate a shell as SVG
//!   whorl breed [options]      Breed a family of shells
//!   whorl genes [options]      Print random genes as JSON
//!   whorl presets              List shell families
//!   whorl patterns             List outline patterns

mod cli;

use std::env;
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cli::{cmd_breed, cmd_genes, cmd_patterns, cmd_presets, cmd_render};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so SVG and JSON output can be piped.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &[String]) -> Result<()> {
    let prog = args.first().map(String::as_str).unwrap_or("whorl");
    let Some(command) = args.get(1) else {
        print_usage(prog);
        return Ok(());
    };
    let rest = &args[2..];

    match command.as_str() {
        "render" => cmd_render(rest),
        "breed" => cmd_breed(rest),
        "genes" => cmd_genes(rest),
        "presets" => {
            cmd_presets();
            Ok(())
        }
        "patterns" => {
            cmd_patterns();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage(prog);
            Ok(())
        }
        other => {
            print_usage(prog);
            anyhow::bail!("Unknown command: {}", other)
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("whorl - seashell spirals from a handful of genes");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} render [options]", prog);
    eprintln!("  {} breed [options] [-n <children>] [--generations <n>] [-o <dir>]", prog);
    eprintln!("  {} genes [--seed <n>] [--preset <name>]", prog);
    eprintln!("  {} presets", prog);
    eprintln!("  {} patterns", prog);
    eprintln!();
    eprintln!("Shell options:");
    eprintln!("  -w, --width <px>       Canvas width (default: 500)");
    eprintln!("  --height <px>          Canvas height (default: 500)");
    eprintln!("  --size <px>            Square canvas");
    eprintln!("  --seed <n>             Seed the random generator");
    eprintln!("  -p, --preset <name>    Draw genes from one family");
    eprintln!("  -g, --genes <file>     Use genes from a JSON snapshot");
    eprintln!("  -r, --recipe <file>    Load settings from a YAML recipe");
    eprintln!("  --lofi                 Draw every other segment");
    eprintln!("  --background <color>   Fill the canvas first");
    eprintln!("  --stroke-width <n>     Outline width (default: 1)");
    eprintln!();
    eprintln!("Render options:");
    eprintln!("  -o, --output <file>    SVG output (default: stdout)");
    eprintln!("  --png <file>           Also rasterise to PNG");
    eprintln!("  --png-scale <n>        PNG scale factor (default: 1)");
    eprintln!("  --json                 Print the genes as JSON instead of the SVG");
    eprintln!();
    eprintln!("Logging: set RUST_LOG (e.g. RUST_LOG=whorl=debug).");
}
