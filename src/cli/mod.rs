//! Command-line interface for the steadystate engine.
//!
//! Argument parsing and output formatting live in their own modules so
//! both can be tested without touching the process environment.

pub mod args;
pub mod output;

use std::process::ExitCode;

use crate::analysis::{analyze, analyze_with};
use crate::characterization::TemplateCharacterizer;
use crate::config::ScenarioConfig;
use crate::kendall::KendallNotation;

use args::{Args, Command};

/// Execute a parsed command.
#[must_use]
pub fn run(args: Args) -> ExitCode {
    match args.command {
        Command::Analyze {
            scenario_path,
            kendall,
            characterize,
        } => cmd_analyze(&scenario_path, kendall.as_deref(), characterize),
        Command::Help => {
            output::print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            output::print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run the `analyze` command against a scenario file.
fn cmd_analyze(
    scenario_path: &std::path::Path,
    kendall: Option<&str>,
    characterize: bool,
) -> ExitCode {
    let config = match ScenarioConfig::load(scenario_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading scenario: {err}");
            return ExitCode::FAILURE;
        }
    };

    // A notation override replaces the structural fields but keeps the
    // rates from the scenario file.
    let params = match kendall {
        Some(raw) => {
            let params =
                KendallNotation::parse(raw).into_parameters(config.queue.lambda, config.queue.mu);
            if let Err(err) = params.ensure_valid() {
                eprintln!("Error in Kendall override: {err}");
                return ExitCode::FAILURE;
            }
            params
        }
        None => config.queue.clone(),
    };

    if characterize {
        match analyze_with(&params, &TemplateCharacterizer) {
            Ok(report) => {
                output::print_report(&config.scenario, &report);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Analysis failed: {err}");
                ExitCode::FAILURE
            }
        }
    } else {
        match analyze(&params) {
            Ok(metrics) => {
                output::print_parameters(&params);
                output::print_metrics(&metrics);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Analysis failed: {err}");
                ExitCode::FAILURE
            }
        }
    }
}
