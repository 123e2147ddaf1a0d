//! Command-line interface for schemagen
//!
//! # Usage Examples
//!
//! ```bash
//! # Ten reproducible values for a schema file
//! schemagen generate --schema schema.yaml --count 10 --seed 42
//!
//! # Inline keywords
//! schemagen integer --minimum 1 --maximum 100 --multiple-of 7
//! schemagen number --minimum 0 --exclusive-minimum --maximum 1
//! schemagen string --min-length 8 --max-length 16 --format password
//!
//! # Registered formats and named primitives
//! schemagen formats
//! ```
//!
//! Set `RUST_LOG=debug` to trace generation decisions.

use anyhow::Context;
use clap::{Parser, Subcommand};
use schemagen::{generate_to, GeneratorOpts, IntegerOpts, NumberOpts, StringOpts};
use schemagen_core::{Format, ScalarSchema};
use schemagen_generator::generators::named_primitive_names;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schemagen")]
#[command(about = "Generate random values satisfying JSON Schema / OpenAPI scalar constraints")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate values for a schema file (JSON or YAML)
    Generate {
        /// Path to the schema file; `.json` is parsed as JSON, anything else as YAML
        #[arg(long)]
        schema: PathBuf,

        #[command(flatten)]
        opts: GeneratorOpts,
    },

    /// Generate integers from inline keywords
    Integer {
        #[command(flatten)]
        keywords: IntegerOpts,

        #[command(flatten)]
        opts: GeneratorOpts,
    },

    /// Generate numbers from inline keywords
    Number {
        #[command(flatten)]
        keywords: NumberOpts,

        #[command(flatten)]
        opts: GeneratorOpts,
    },

    /// Generate strings from inline keywords
    String {
        #[command(flatten)]
        keywords: StringOpts,

        #[command(flatten)]
        opts: GeneratorOpts,
    },

    /// List the registered string formats and named primitives
    Formats,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (schema, opts) = match cli.command {
        Commands::Generate { schema, opts } => {
            let loaded = ScalarSchema::from_file(&schema)
                .with_context(|| format!("Failed to load schema from {schema:?}"))?;
            (loaded, opts)
        }
        Commands::Integer { keywords, opts } => (keywords.to_schema(), opts),
        Commands::Number { keywords, opts } => (keywords.to_schema(), opts),
        Commands::String { keywords, opts } => (keywords.to_schema(), opts),
        Commands::Formats => return list_formats(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    generate_to(&schema, &opts, &mut out)?;
    out.flush()?;
    Ok(())
}

fn list_formats() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for format in Format::ALL {
        let spec = format.spec();
        writeln!(
            out,
            "{:<12} {:<20} {:?}",
            format.name(),
            format!("{:?}", spec.length_type),
            spec.return_kind
        )?;
    }
    for name in named_primitive_names() {
        writeln!(out, "{name:<12} {:<20} Text", "Unconstrained")?;
    }
    Ok(())
}
