// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::models::RuntimeConfig;
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<ExitCode> {
    // 1. Parse Args (only --help / --version exist)
    let args = Cli::parse();
    log::debug!("Parsed arguments: {:?}", args);

    // 2. Resolve root, output path and filters
    let config = resolve_config()?;

    // 3. Scan + render
    let report = build_report(&config)?;

    // 4. Write, then tell the user how it went (exactly one console line)
    let outcome = write_report(&config.output_path, &report);
    match console_line(&config.output_path, &outcome) {
        Ok(line) => {
            println!("{}", line);
            Ok(ExitCode::SUCCESS)
        }
        Err(line) => {
            eprintln!("{}", line);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// The single line shown to the user after the write attempt. `Err` goes to stderr.
pub fn console_line(output_path: &Path, outcome: &Result<()>) -> Result<String, String> {
    match outcome {
        Ok(()) => Ok(format!(
            "✅ Resumen generado correctamente en: {}",
            output_path.display()
        )),
        Err(err) => {
            log::debug!("Writing summary failed: {:?}", err);
            let message = format!("{:#}", err).replace(['\r', '\n'], " ");
            Err(format!("❌ Error al guardar el archivo: {}", message))
        }
    }
}

/// Walks `config.root` and renders the full summary text. Unreadable files end up as
/// inline markers, so this only fails on an invalid filter configuration.
pub fn build_report(config: &RuntimeConfig) -> Result<String> {
    let scanner = Scanner::new(config.root.clone(), &config.filters)?;
    let entries = scanner.scan();

    let dirs = entries.iter().filter(|e| e.is_dir).count();
    log::info!(
        "📂 Scanned {} directories, {} relevant files",
        dirs,
        entries.len() - dirs
    );

    Ok(OutputGenerator::render(&entries))
}

/// Overwrites `path` with the report.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report).context(format!("Failed to write {}", path.display()))
}
