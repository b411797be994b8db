use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use workout_core::{
    default_packages, load_packages, process_packages, save_summaries, write_report, ReportFormat,
};

/// Skriver en treningsrapport per sensorpakke.
#[derive(Debug, Parser)]
#[command(name = "workout-report", version, about)]
struct Args {
    /// JSON-fil med pakker; uten fil brukes demo-pakkene
    packages: Option<PathBuf>,

    /// Én JSON-oppsummering per linje i stedet for tekst
    #[arg(long)]
    json: bool,

    /// Lagre alle oppsummeringer som JSON til denne filen
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug-logging (overstyres av RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Logg til stderr så stdout kun inneholder rapporten
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let packages = match &args.packages {
        Some(path) => load_packages(path)
            .with_context(|| format!("failed to load packages from {}", path.display()))?,
        None => default_packages(),
    };

    let outcome = process_packages(&packages);

    let format = if args.json { ReportFormat::JsonLines } else { ReportFormat::Text };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &outcome, format).context("failed to write report")?;
    out.flush()?;

    if let Some(path) = &args.output {
        save_summaries(&outcome.summaries, path)
            .with_context(|| format!("failed to save summaries to {}", path.display()))?;
    }

    for r in &outcome.rejected {
        eprintln!("package #{} ({}): {}", r.index, r.workout_type, r.error);
    }

    if !outcome.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
