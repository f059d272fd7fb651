//! Configuration for the in-memory release proxy.

/// Default list limit used when an operation does not supply one
pub const DEFAULT_RELEASE_LIST_LIMIT: usize = 256;

/// Largest list limit accepted from the environment or the command line
pub const MAX_RELEASE_LIST_LIMIT: usize = 10_000;

/// Environment variable overriding [`ProxyConfig::release_list_limit`]
///
/// Values outside `1..=MAX_RELEASE_LIST_LIMIT`, or that do not parse, are
/// ignored and the default limit is kept.
pub const LIST_MAX_ENV: &str = "RELEASE_PROXY_LIST_MAX";

/// Proxy configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Limit applied to listings that do not specify one
    pub release_list_limit: usize,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            release_list_limit: DEFAULT_RELEASE_LIST_LIMIT,
        }
    }
}

impl ProxyConfig {
    /// Parse a limit, falling back to `default` unless it is in `1..=max`
    fn parse_limit(value: Option<&str>, default: usize, max: usize) -> usize {
        value
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|v| (1..=max).contains(v))
            .unwrap_or(default)
    }

    /// Create config from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        Self {
            release_list_limit: Self::parse_limit(
                std::env::var(LIST_MAX_ENV).ok().as_deref(),
                DEFAULT_RELEASE_LIST_LIMIT,
                MAX_RELEASE_LIST_LIMIT,
            ),
        }
    }

    /// Override the default list limit
    pub fn with_release_list_limit(mut self, limit: usize) -> Self {
        self.release_list_limit = limit;
        self
    }

    /// Validate the configured values
    pub fn validate(&self) -> Result<(), String> {
        if self.release_list_limit == 0 {
            return Err("release list limit must be at least 1".to_string());
        }
        if self.release_list_limit > MAX_RELEASE_LIST_LIMIT {
            return Err(format!(
                "release list limit too high: {} (max: {})",
                self.release_list_limit, MAX_RELEASE_LIST_LIMIT
            ));
        }
        Ok(())
    }
}
