//! CLI logic for the stagevis renderer.
//!
//! This module contains the core CLI logic: configuration discovery and
//! driving the [`Renderer`] over the paths given on the command line.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::Path;

use clap::CommandFactory;
use log::info;

use stagevis::{Renderer, StagevisError};

use error_adapter::ErrorAdapter;

/// Usage text and exit status for rejected command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageExit {
    pub usage: String,
    pub code: i32,
}

/// Maps an argument parsing error to the usage line printed on stdout.
///
/// Returns `None` for requests clap answers itself, such as `--help` and
/// `--version`.
pub fn usage_exit(err: &clap::Error) -> Option<UsageExit> {
    if !err.use_stderr() {
        return None;
    }

    Some(UsageExit {
        usage: Args::command().render_usage().to_string(),
        code: 1,
    })
}

/// Renders a failed run as a graphical diagnostic report.
pub fn render_report(err: &StagevisError) -> String {
    let mut writer = String::new();
    if miette::GraphicalReportHandler::new()
        .render_report(&mut writer, &ErrorAdapter(err))
        .is_err()
    {
        return err.to_string();
    }
    writer
}

/// Run the stagevis CLI application
///
/// Loads the style configuration, then renders the problem (and the solution,
/// if one was given) to the output SVG file.
///
/// # Errors
///
/// Returns `StagevisError` for:
/// - Configuration loading errors
/// - File I/O errors
/// - Parsing errors
/// - Placements without a matching instrument
pub fn run(args: &Args) -> Result<(), StagevisError> {
    info!(
        output_path = args.output,
        problem_path = args.problem,
        solution_path:? = args.solution;
        "Rendering scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let renderer = Renderer::new(&app_config)?;

    renderer.render_to_file(
        Path::new(&args.output),
        Path::new(&args.problem),
        args.solution.as_deref().map(Path::new),
    )?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
