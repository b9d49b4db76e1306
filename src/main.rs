//! The main entry point for the `reword` command-line application.
//!
//! Parses arguments, sets up logging and colors, and hands the validated
//! configuration to the runner. Any error ends the process with status 1.

use clap::ColorChoice;
use log::LevelFilter;
use reword::cli;
use reword::config::RunConfig;
use reword::output::{self, Reporter};
use reword::prompt::TerminalPrompt;
use reword::runner::{self, Outcome};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::parse_args();
    setup_logging(args.verbose);
    setup_colors(args.color);

    let config = match RunConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            output::print_error(e);
            return ExitCode::FAILURE;
        }
    };

    let mut reporter = Reporter::new(io::stdout());
    match runner::run(&config, &mut TerminalPrompt, &mut reporter) {
        Ok(Outcome::Completed(_)) | Ok(Outcome::Cancelled) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(e);
            ExitCode::FAILURE
        }
    }
}

/// Warnings by default; each `-v` adds a level. `RUST_LOG` wins when set.
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn setup_colors(choice: ColorChoice) {
    use colored::control;

    match choice {
        ColorChoice::Always => control::set_override(true),
        ColorChoice::Never => control::set_override(false),
        ColorChoice::Auto => {}
    }
}
