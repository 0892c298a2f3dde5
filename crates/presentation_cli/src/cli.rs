//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// WoofAreYou pet book
#[derive(Debug, Parser)]
#[command(name = "woofareyou")]
#[command(author, version, about = "WoofAreYou pet boarding book", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "WOOFAREYOU_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start with sample pets instead of an empty pet book
    #[arg(long)]
    pub sample: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Read one JSON command per line from stdin and print the feedback
    ///
    /// Example line: {"type":"charge","index":1,"month":"03-2022","rate":200}
    #[default]
    Run,

    /// Print the usage of every command
    Usage,

    /// Print the effective configuration as TOML
    Config,
}

/// Log filter forced by `-v` flags; `None` keeps the configured filter
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
