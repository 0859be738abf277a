//! CLI logic for the Umlwright diagram tool.
//!
//! This module contains the core CLI logic: it loads configuration, reads the
//! input file, drives the [`DiagramPipeline`] and writes the results.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, ConvertArgs, ExtractArgs};

use std::{
    fs,
    io::{self, Write},
};

use log::{debug, info};
use serde_json::Value;

use umlwright::{DiagramKind, DiagramPipeline, UmlwrightError};

/// Run the Umlwright CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `UmlwrightError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - An unknown requested diagram kind
pub fn run(args: &Args) -> Result<(), UmlwrightError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let pipeline = DiagramPipeline::new(app_config);

    match &args.command {
        Command::Convert(convert) => run_convert(&pipeline, convert),
        Command::Extract(extract) => run_extract(&pipeline, extract),
    }
}

fn run_convert(pipeline: &DiagramPipeline, args: &ConvertArgs) -> Result<(), UmlwrightError> {
    info!(input_path = args.input; "Converting diagram");

    let source = fs::read_to_string(&args.input)?;
    let snippet = pipeline.convert(&source, args.hint.as_deref());

    write_output(args.output.as_deref(), snippet.text())
}

fn run_extract(pipeline: &DiagramPipeline, args: &ExtractArgs) -> Result<(), UmlwrightError> {
    info!(input_path = args.input; "Extracting generated output");

    let requested = args
        .kind
        .as_deref()
        .map(str::parse::<DiagramKind>)
        .transpose()?;

    let content = fs::read_to_string(&args.input)?;
    let raw = serde_json::from_str::<Value>(&content).unwrap_or_else(|err| {
        debug!(err = err.to_string(); "Input is not JSON, treating it as plain text");
        Value::String(content.clone())
    });

    let outcome = pipeline.process(&raw, requested);
    let json = serde_json::to_string_pretty(&outcome)?;
    write_output(args.output.as_deref(), &json)?;

    if let Some(page) = &args.html {
        fs::write(page, pipeline.render_html(outcome.diagram()))?;
        info!(html_path = page.as_str(); "HTML page written");
    }

    Ok(())
}

/// Write `content` to `path`, or to standard output when no path is given.
fn write_output(path: Option<&str>, content: &str) -> Result<(), UmlwrightError> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            info!(output_path = path; "Output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content.trim_end())?;
        }
    }
    Ok(())
}
