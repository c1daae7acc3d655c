//! Stagevis CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{Level, LevelFilter, debug, error, info, log_enabled};

use stagevis_cli::Args;

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Argument errors print the usage to stdout and exit non-zero
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match stagevis_cli::usage_exit(&err) {
            Some(exit) => {
                println!("{}", exit.usage);
                process::exit(exit.code);
            }
            None => err.exit(),
        },
    };

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting stagevis");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = stagevis_cli::run(&args) {
        let report = stagevis_cli::render_report(&err);

        // The report must reach the terminal even with logging turned off
        if log_enabled!(Level::Error) {
            error!("{report}");
        } else {
            eprintln!("{report}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
