//! Singles CLI
//!
//! Builds single-header distributions from a tree of C/C++ headers.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use singles_builder::{AmalgamationReport, Amalgamator};
use singles_core::{BuildOptions, Manifest, Target};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "build-singles")]
#[command(author, version, about = "Amalgamate C/C++ headers into a single header", long_about = None)]
struct Cli {
    /// Root header to amalgamate
    #[arg(value_name = "INPUT", required_unless_present = "manifest")]
    input: Option<PathBuf>,

    /// Single header to write
    #[arg(value_name = "OUTPUT", required_unless_present = "manifest")]
    output: Option<PathBuf>,

    /// Build every target listed in a YAML manifest instead
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["input", "output"])]
    manifest: Option<PathBuf>,

    /// Maximum include nesting (overrides the manifest)
    #[arg(long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    max_include_depth: Option<usize>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Don't print a summary line per target
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let (mut options, targets) = match (&cli.manifest, &cli.input, &cli.output) {
        (Some(manifest), _, _) => {
            let manifest = Manifest::load(manifest)
                .with_context(|| format!("loading manifest {}", manifest.display()))?;
            (manifest.options, manifest.targets)
        }
        (None, Some(input), Some(output)) => (
            BuildOptions::default(),
            vec![Target {
                input: input.clone(),
                output: output.clone(),
            }],
        ),
        _ => anyhow::bail!("expected INPUT and OUTPUT, or --manifest"),
    };

    if let Some(depth) = cli.max_include_depth {
        options.max_include_depth = depth;
    }

    let amalgamator = Amalgamator::new(options);
    for target in &targets {
        let report = amalgamator
            .amalgamate(&target.input, &target.output)
            .with_context(|| format!("building single header from {}", target.input.display()))?;

        if !cli.quiet {
            print_report(&report);
        }
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn print_report(report: &AmalgamationReport) {
    println!(
        "📦 {} -> {} ({} files, {} system includes, {} bytes)",
        report.input.display(),
        report.output.display(),
        report.inlined_files,
        report.system_includes,
        report.bytes
    );
}
