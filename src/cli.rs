// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `prereqdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "prereqdag",
    version,
    about = "Build course prerequisite graphs and track per-course readiness.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a course records JSON file to generate a flow from.
    #[arg(long, value_name = "PATH")]
    pub courses: Option<String>,

    /// Path to an existing flow document to load instead of generating.
    #[arg(long, value_name = "PATH")]
    pub flow: Option<String>,

    /// How to resolve ambiguous prerequisite clauses
    /// ("conservative" or "aggressively").
    ///
    /// Overrides `[parse].ambiguity` from the config file.
    #[arg(long, value_name = "MODE")]
    pub ambiguity: Option<String>,

    /// Set a course status before recomputing, e.g.
    /// `--set "CSE 142=completed"`. May be repeated.
    #[arg(long = "set", value_name = "COURSE=STATUS")]
    pub set_status: Vec<String>,

    /// Write the resulting flow document to this path.
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// Assign automatic node positions before writing output.
    #[arg(long)]
    pub layout: bool,

    /// Path to the config file (TOML).
    ///
    /// Default: `Prereqdag.toml` in the current working directory; a missing
    /// file just means defaults.
    #[arg(long, value_name = "PATH", default_value = "Prereqdag.toml")]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PREREQDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the graph summary, don't write anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
