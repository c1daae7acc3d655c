//! Command-line argument definitions for the stagevis CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Positional arguments name the output image and the input
//! documents; options control configuration file selection and logging
//! verbosity.

use clap::Parser;

/// Render a stage placement problem, and optionally a solution, to SVG
#[derive(Parser, Debug)]
#[command(name = "stagevis", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file
    #[arg(help = "Path to the output SVG file")]
    pub output: String,

    /// Path to the problem JSON file
    #[arg(help = "Path to the problem JSON file")]
    pub problem: String,

    /// Path to the solution JSON file
    #[arg(help = "Path to the solution JSON file (optional)")]
    pub solution: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
