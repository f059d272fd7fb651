//! Release records and their listing projection.

mod overview;
mod status;

pub use overview::AppOverview;
pub use status::StatusCode;

use serde::{Deserialize, Serialize};

/// A named, namespaced instance of a deployed package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Release name, unique within a store
    pub name: String,
    /// Namespace the release was installed into
    #[serde(default)]
    pub namespace: String,
    /// Current status
    #[serde(default)]
    pub status: StatusCode,
    /// Chart version; always empty in the in-memory proxy
    #[serde(default)]
    pub version: String,
}

impl Release {
    /// Create a deployed release with no version
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            status: StatusCode::Deployed,
            version: String::new(),
        }
    }

    /// Whether this release is visible when listing `namespace`
    ///
    /// An empty namespace matches every release.
    pub fn in_namespace(&self, namespace: &str) -> bool {
        namespace.is_empty() || self.namespace == namespace
    }

    /// Summary projection for listings
    pub fn overview(&self) -> AppOverview {
        AppOverview::from(self)
    }
}
