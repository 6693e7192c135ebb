/*!
 * Command-line interface for project-reporter
 */

use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;
use tracing_subscriber::EnvFilter;

use project_reporter::config::{Args, Config};
use project_reporter::report::{Reporter, ScanReport};
use project_reporter::scanner::Scanner;
use project_reporter::writer::ReportWriter;
use project_reporter::Result;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // No options besides --help and --version
    let _args = Args::parse();

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("project-reporter: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::for_executable()?;
    config.validate()?;

    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {wide_msg:.dim.white}") {
        progress.set_style(style);
    }
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_message(format!("Scanning directory: {}", config.root.display()));

    let scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let writer = ReportWriter::new(config.clone());

    let start_time = Instant::now();
    let result = writer.write(&scanner);
    progress.finish_and_clear();
    let statistics = result?;

    let scan_report = ScanReport {
        output_file: config.output_path().display().to_string(),
        duration: start_time.elapsed(),
        statistics,
    };

    Reporter::new().print_report(&scan_report);

    Ok(())
}
