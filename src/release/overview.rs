//! Summary projection of a release for listings.

use super::Release;
use serde::{Deserialize, Serialize};

/// Summary of a release as shown in application listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppOverview {
    /// Release name
    pub release_name: String,
    /// Chart version (left blank by the in-memory proxy)
    pub version: String,
    /// Release namespace
    pub namespace: String,
    /// Chart icon URL (left blank by the in-memory proxy)
    pub icon: String,
    /// Release status wire name
    pub status: String,
}

impl From<&Release> for AppOverview {
    fn from(release: &Release) -> Self {
        Self {
            release_name: release.name.clone(),
            version: String::new(),
            namespace: release.namespace.clone(),
            icon: String::new(),
            status: release.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_from_release() {
        let release = Release::new("foo", "ns1");
        let overview = AppOverview::from(&release);
        assert_eq!(overview.release_name, "foo");
        assert_eq!(overview.namespace, "ns1");
        assert_eq!(overview.status, "DEPLOYED");
        assert!(overview.version.is_empty());
        assert!(overview.icon.is_empty());
    }

    #[test]
    fn test_overview_json_keys() {
        let overview = AppOverview::from(&Release::new("foo", "ns1"));
        let value = serde_json::to_value(&overview).unwrap();
        assert_eq!(value["releaseName"], "foo");
        assert_eq!(value["namespace"], "ns1");
        assert_eq!(value["status"], "DEPLOYED");
        assert_eq!(value["icon"], "");
    }
}
