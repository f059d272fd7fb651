//! Release status codes.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a release as reported by the release backend
///
/// The in-memory proxy only ever reports [`StatusCode::Deployed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    /// Status could not be determined
    Unknown,
    /// Release is installed and current
    #[default]
    Deployed,
    /// Release was removed
    Deleted,
    /// Release was replaced by a newer revision
    Superseded,
    /// Install or upgrade failed
    Failed,
    /// Removal in progress
    Deleting,
    /// Install in progress
    PendingInstall,
    /// Upgrade in progress
    PendingUpgrade,
    /// Rollback in progress
    PendingRollback,
}

impl StatusCode {
    /// Wire name of the status, e.g. `DEPLOYED`
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Unknown => "UNKNOWN",
            StatusCode::Deployed => "DEPLOYED",
            StatusCode::Deleted => "DELETED",
            StatusCode::Superseded => "SUPERSEDED",
            StatusCode::Failed => "FAILED",
            StatusCode::Deleting => "DELETING",
            StatusCode::PendingInstall => "PENDING_INSTALL",
            StatusCode::PendingUpgrade => "PENDING_UPGRADE",
            StatusCode::PendingRollback => "PENDING_ROLLBACK",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_deployed() {
        assert_eq!(StatusCode::default(), StatusCode::Deployed);
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(StatusCode::Deployed.to_string(), "DEPLOYED");
        assert_eq!(StatusCode::PendingInstall.to_string(), "PENDING_INSTALL");
    }

    #[test]
    fn test_serde_matches_display() {
        let json = serde_json::to_string(&StatusCode::PendingUpgrade).unwrap();
        assert_eq!(json, "\"PENDING_UPGRADE\"");
        let back: StatusCode = serde_json::from_str("\"SUPERSEDED\"").unwrap();
        assert_eq!(back, StatusCode::Superseded);
    }
}
