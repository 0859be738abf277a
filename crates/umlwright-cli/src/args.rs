//! Command-line argument definitions for the Umlwright CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects conversion or extraction; the global
//! options control configuration file selection and logging verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Umlwright diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML); overrides `UMLWRIGHT_CONFIG`
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// The operation to run
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a PlantUML-style source into a Mermaid-style diagram
    Convert(ConvertArgs),

    /// Recover a recommendation and a diagram from generated output
    Extract(ExtractArgs),
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Path to the source diagram
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Requested diagram kind, used for diagnostics only
    #[arg(long)]
    pub hint: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ExtractArgs {
    /// Path to the generated output, JSON or plain text
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the JSON result file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Requested diagram kind (e.g. "Class", "State Machine")
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Also write a standalone HTML page showing the diagram
    #[arg(long)]
    pub html: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let args = Args::parse_from(["umlwright", "convert", "in.puml", "-o", "out.mmd", "--hint", "Class"]);
        let Command::Convert(convert) = args.command else {
            panic!("Expected convert subcommand");
        };
        assert_eq!(convert.input, "in.puml");
        assert_eq!(convert.output.as_deref(), Some("out.mmd"));
        assert_eq!(convert.hint.as_deref(), Some("Class"));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_parse_extract_with_global_options() {
        let args = Args::parse_from([
            "umlwright",
            "extract",
            "result.json",
            "--kind",
            "State Machine",
            "--html",
            "page.html",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
        ]);
        let Command::Extract(extract) = args.command else {
            panic!("Expected extract subcommand");
        };
        assert_eq!(extract.input, "result.json");
        assert_eq!(extract.output, None);
        assert_eq!(extract.kind.as_deref(), Some("State Machine"));
        assert_eq!(extract.html.as_deref(), Some("page.html"));
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
        assert_eq!(args.log_level, "debug");
    }
}
