//! Command execution for the scenario runner.

mod run;

use crate::cli::{Args, RuntimeConfig};
use crate::error::{CliError, ProxyError, Result};

use run::execute_run;

/// Execute the scenario described by the parsed arguments
pub fn execute_command(args: Args) -> Result<i32> {
    if let Err(reason) = args.validate() {
        // Create output for validation errors (never quiet)
        let output = super::OutputManager::new(false);
        let error = ProxyError::from(CliError::InvalidArguments { reason });
        output.error(&error.to_string());
        for suggestion in error.recovery_suggestions() {
            let _ = output.indent(&suggestion);
        }
        return Ok(1);
    }

    let config = RuntimeConfig::from(&args);

    match execute_run(&args, &config) {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            config.error_println(&format!(
                "Scenario '{}' failed: {}",
                args.scenario.display(),
                e
            ));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() && !config.is_quiet() {
                config.println("\nRecovery suggestions:");
                for suggestion in suggestions {
                    config.println(&format!("  • {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}
