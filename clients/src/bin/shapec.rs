//! `shapec`: compiles a SHACL shapes graph into a resolved object model.
//!
//! Reads a Turtle shapes graph, resolves its node shapes into object types,
//! and writes the model as JSON for downstream code emitters.
//!
//! **Usage:**
//! ```text
//! shapec <INPUT.ttl> [--out <path>] [--config <path>] [--language <tag>]... [--verbose]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shapec_clients::{compile, init_tracing, Config};
use tracing::info;

/// Compile a SHACL shapes graph into a JSON object model.
#[derive(Parser)]
#[command(name = "shapec", version, about = "Compile SHACL shapes into a typed object model")]
struct Args {
    /// Turtle file holding the shapes graph.
    input: PathBuf,

    /// Output file. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Configuration file. Defaults to `shapec.toml` if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preferred language tag; repeat for several. Overrides the config file.
    #[arg(long = "language", value_name = "TAG")]
    languages: Vec<String>,

    /// Log debug events.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = Config::load(args.config.as_deref())?;
    if !args.languages.is_empty() {
        config.languages = args.languages;
    }

    let turtle = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let model = compile(&turtle, &config.decode_options())
        .with_context(|| format!("Failed to compile {}", args.input.display()))?;
    let json = if config.pretty {
        serde_json::to_string_pretty(&model)
    } else {
        serde_json::to_string(&model)
    }
    .context("Failed to serialize object model")?;

    match &args.out {
        Some(out) => {
            fs::write(out, &json).with_context(|| format!("Failed to write {}", out.display()))?;
            info!(path = %out.display(), "written object model");
        }
        None => println!("{json}"),
    }
    Ok(())
}
