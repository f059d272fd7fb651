//! Run command implementation.
//!
//! Loads a scenario, replays it and reports each outcome.

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;
use crate::scenario::{Outcome, Scenario, ScenarioReport};

/// Exit code when `--expect-clean` is set and an operation failed
pub(super) const EXIT_OPERATION_FAILED: i32 = 2;

/// Execute the scenario run
pub(super) fn execute_run(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let scenario = Scenario::load(&args.scenario)?;
    let report = scenario.run(config.proxy.clone())?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&scenario, &report, config);
    }

    let failures = report.failures();
    if failures > 0 && config.expect_clean {
        log::debug!("{} operations failed with --expect-clean", failures);
        return Ok(EXIT_OPERATION_FAILED);
    }

    Ok(0)
}

fn print_report(scenario: &Scenario, report: &ScenarioReport, config: &RuntimeConfig) {
    let output = config.output();
    let _ = output.section(&format!("Scenario ({} operations)", scenario.operations.len()));

    for (operation, outcome) in scenario.operations.iter().zip(&report.outcomes) {
        match outcome {
            Outcome::Ok { result, .. } => {
                config.success_println(&operation.describe());
                if !result.is_null() {
                    config.indent(&result.to_string());
                }
            }
            Outcome::Error { message, .. } => {
                let _ = output.failure(&format!("{}: {}", operation.describe(), message));
            }
        }
    }

    let summary = format!(
        "{} succeeded, {} failed, {} releases remaining",
        report.outcomes.len() - report.failures(),
        report.failures(),
        report.final_releases.len()
    );
    if report.failures() > 0 {
        let _ = output.warn(&summary);
    } else {
        let _ = output.info(&summary);
    }
}
