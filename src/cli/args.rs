//! Command line argument parsing and validation.

use crate::config::ProxyConfig;
use clap::Parser;
use std::path::PathBuf;

/// Replay release proxy operations against an in-memory store
#[derive(Parser, Debug)]
#[command(
    name = "release_proxy",
    version,
    about = "Replay release proxy operations against an in-memory store",
    long_about = "Replay a JSON scenario of release operations against an in-memory release proxy.

Usage:
  release_proxy scenario.json
  release_proxy scenario.json --json
  release_proxy scenario.json --list-max 50 --expect-clean"
)]
pub struct Args {
    /// Scenario file with seed releases and operations
    #[arg(index = 1, value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Print outcomes as JSON
    #[arg(long)]
    pub json: bool,

    /// Only print failed operations and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Default limit for list operations without an explicit limit
    /// (overrides RELEASE_PROXY_LIST_MAX)
    #[arg(long, value_name = "N")]
    pub list_max: Option<usize>,

    /// Exit with code 2 if any operation fails
    #[arg(long)]
    pub expect_clean: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.scenario.as_os_str().is_empty() {
            return Err("Scenario file is required".to_string());
        }

        if self.json && self.quiet {
            return Err("--json and --quiet cannot be combined".to_string());
        }

        self.proxy_config().validate()
    }

    /// Proxy configuration from the environment, overridden by the arguments
    pub fn proxy_config(&self) -> ProxyConfig {
        let config = ProxyConfig::from_env();
        match self.list_max {
            Some(limit) => config.with_release_list_limit(limit),
            None => config,
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
    /// Proxy configuration for the run
    pub proxy: ProxyConfig,
    /// Print outcomes as JSON
    pub json: bool,
    /// Treat failed operations as a failed run
    pub expect_clean: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.quiet),
            proxy: args.proxy_config(),
            json: args.json,
            expect_clean: args.expect_clean,
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.output.is_quiet()
    }
}
