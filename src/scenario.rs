//! Scenario replay against the in-memory proxy.
//!
//! A scenario is a JSON document with optional seed releases and a list of
//! operations tagged by `"op"`:
//!
//! ```json
//! {
//!   "releases": [{ "name": "existing", "namespace": "default" }],
//!   "operations": [
//!     { "op": "create", "name": "foo", "namespace": "ns1" },
//!     { "op": "list", "namespace": "ns1", "limit": 10 },
//!     { "op": "delete", "name": "foo" }
//!   ]
//! }
//! ```

use crate::chart::Chart;
use crate::config::ProxyConfig;
use crate::error::{ProxyError, Result, ScenarioError};
use crate::proxy::{FakeProxy, ReleaseProxy};
use crate::release::Release;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scripted sequence of proxy operations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Releases present before the first operation
    #[serde(default)]
    pub releases: Vec<Release>,
    /// Operations to replay, in order
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// A single proxy call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// `list_releases`
    List {
        /// Release namespace
        #[serde(default)]
        namespace: String,
        /// Falls back to the configured list limit
        #[serde(default)]
        limit: Option<usize>,
    },
    /// `get_release`
    Get {
        /// Release name
        name: String,
        /// Release namespace
        #[serde(default)]
        namespace: String,
    },
    /// `create_release`
    Create {
        /// Release name
        name: String,
        /// Release namespace
        #[serde(default)]
        namespace: String,
        /// Serialized chart values
        #[serde(default)]
        values: String,
        /// Chart to install
        #[serde(default)]
        chart: Chart,
    },
    /// `update_release`
    Update {
        /// Release name
        name: String,
        /// Release namespace
        #[serde(default)]
        namespace: String,
        /// Serialized chart values
        #[serde(default)]
        values: String,
        /// Chart to install
        #[serde(default)]
        chart: Chart,
    },
    /// `delete_release`
    Delete {
        /// Release name
        name: String,
        /// Release namespace
        #[serde(default)]
        namespace: String,
    },
    /// `get_release_status`
    Status {
        /// Release name
        name: String,
    },
    /// `resolve_manifest`
    Resolve {
        /// Release namespace
        #[serde(default)]
        namespace: String,
        /// Serialized chart values
        #[serde(default)]
        values: String,
        /// Chart to install
        #[serde(default)]
        chart: Chart,
    },
}

impl Operation {
    /// Short name of the operation, matching its `"op"` tag
    pub fn name(&self) -> &'static str {
        match self {
            Operation::List { .. } => "list",
            Operation::Get { .. } => "get",
            Operation::Create { .. } => "create",
            Operation::Update { .. } => "update",
            Operation::Delete { .. } => "delete",
            Operation::Status { .. } => "status",
            Operation::Resolve { .. } => "resolve",
        }
    }

    /// One-line human readable description
    pub fn describe(&self) -> String {
        match self {
            Operation::List { namespace, limit } => {
                let ns = if namespace.is_empty() { "*" } else { namespace.as_str() };
                match limit {
                    Some(limit) => format!("list {} (limit {})", ns, limit),
                    None => format!("list {}", ns),
                }
            }
            Operation::Get { name, .. }
            | Operation::Create { name, .. }
            | Operation::Update { name, .. }
            | Operation::Delete { name, .. }
            | Operation::Status { name } => format!("{} {}", self.name(), name),
            Operation::Resolve { chart, .. } => format!("resolve {}", chart),
        }
    }
}

/// Result of replaying one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Operation succeeded; `result` holds its JSON-encoded return value
    Ok {
        /// Operation name
        op: String,
        /// JSON-encoded return value
        result: serde_json::Value,
    },
    /// Operation failed with a store error
    Error {
        /// Operation name
        op: String,
        /// Error kind, `already_exists` or `not_found`
        kind: String,
        /// Error message
        message: String,
    },
}

impl Outcome {
    /// Whether the operation failed
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }
}

/// Summary of a scenario run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// One outcome per operation, in order
    pub outcomes: Vec<Outcome>,
    /// Releases left in the store after the last operation
    pub final_releases: Vec<Release>,
}

impl ScenarioReport {
    /// Number of failed operations
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_error()).count()
    }
}

impl Scenario {
    /// Parse a scenario from JSON text
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a scenario file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_json(&content).map_err(|source| ScenarioError::ParseFailed {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Loaded scenario {} ({} seed releases, {} operations)",
            path.display(),
            scenario.releases.len(),
            scenario.operations.len()
        );
        Ok(scenario)
    }

    /// Replay the scenario against a fresh proxy seeded with its releases
    pub fn run(&self, config: ProxyConfig) -> Result<ScenarioReport> {
        let mut proxy = FakeProxy::with_config(config).with_releases(self.releases.clone());
        let mut outcomes = Vec::with_capacity(self.operations.len());

        for operation in &self.operations {
            outcomes.push(apply(&mut proxy, operation)?);
        }

        Ok(ScenarioReport {
            outcomes,
            final_releases: proxy.releases().to_vec(),
        })
    }
}

/// Apply one operation to `proxy`
///
/// Store errors become [`Outcome::Error`]; any other error aborts the run.
pub fn apply(proxy: &mut FakeProxy, operation: &Operation) -> Result<Outcome> {
    log::debug!("Applying {}", operation.describe());

    let result = match operation {
        Operation::List { namespace, limit } => {
            let limit = limit.unwrap_or(proxy.config().release_list_limit);
            to_value(proxy.list_releases(namespace, limit))
        }
        Operation::Get { name, namespace } => to_value(proxy.get_release(name, namespace)),
        Operation::Create {
            name,
            namespace,
            values,
            chart,
        } => to_value(proxy.create_release(name, namespace, values, chart)),
        Operation::Update {
            name,
            namespace,
            values,
            chart,
        } => to_value(proxy.update_release(name, namespace, values, chart)),
        Operation::Delete { name, namespace } => to_value(proxy.delete_release(name, namespace)),
        Operation::Status { name } => to_value(proxy.get_release_status(name)),
        Operation::Resolve {
            namespace,
            values,
            chart,
        } => to_value(proxy.resolve_manifest(namespace, values, chart)),
    };

    let op = operation.name().to_string();
    match result {
        Ok(result) => Ok(Outcome::Ok { op, result }),
        Err(ProxyError::Release(err)) => Ok(Outcome::Error {
            op,
            kind: err.kind().to_string(),
            message: err.to_string(),
        }),
        Err(e) => Err(e),
    }
}

fn to_value<T: Serialize>(result: Result<T>) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(result?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "operations": [
            { "op": "create", "name": "foo", "namespace": "ns1" },
            { "op": "create", "name": "bar", "namespace": "ns2" },
            { "op": "list", "namespace": "ns1", "limit": 10 },
            { "op": "delete", "name": "foo", "namespace": "ns1" },
            { "op": "get", "name": "foo", "namespace": "ns1" }
        ]
    }"#;

    #[test]
    fn test_parse_operations() {
        let scenario = Scenario::from_json(SAMPLE).unwrap();
        assert!(scenario.releases.is_empty());
        assert_eq!(scenario.operations.len(), 5);
        assert_eq!(
            scenario.operations[0],
            Operation::Create {
                name: "foo".to_string(),
                namespace: "ns1".to_string(),
                values: String::new(),
                chart: Chart::default(),
            }
        );
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let result = Scenario::from_json(r#"{"operations": [{"op": "rollback", "name": "x"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_sample_scenario() {
        let scenario = Scenario::from_json(SAMPLE).unwrap();
        let report = scenario.run(ProxyConfig::default()).unwrap();

        assert_eq!(report.outcomes.len(), 5);
        assert_eq!(report.failures(), 1);

        match &report.outcomes[2] {
            Outcome::Ok { op, result } => {
                assert_eq!(op, "list");
                let listed = result.as_array().unwrap();
                assert_eq!(listed.len(), 1);
                assert_eq!(listed[0]["releaseName"], "foo");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert_eq!(
            report.outcomes[4],
            Outcome::Error {
                op: "get".to_string(),
                kind: "not_found".to_string(),
                message: "Release foo not found".to_string(),
            }
        );
        assert_eq!(report.final_releases, vec![Release::new("bar", "ns2")]);
    }

    #[test]
    fn test_list_without_limit_uses_config() {
        let scenario = Scenario {
            releases: vec![
                Release::new("a", "ns"),
                Release::new("b", "ns"),
                Release::new("c", "ns"),
            ],
            operations: vec![Operation::List {
                namespace: String::new(),
                limit: None,
            }],
        };
        let report = scenario
            .run(ProxyConfig::default().with_release_list_limit(1))
            .unwrap();
        match &report.outcomes[0] {
            Outcome::Ok { result, .. } => assert_eq!(result.as_array().unwrap().len(), 2),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_status_and_resolve_outcomes() {
        let mut proxy = FakeProxy::new();
        let status = apply(
            &mut proxy,
            &Operation::Status {
                name: "ghost".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            status,
            Outcome::Ok {
                op: "status".to_string(),
                result: serde_json::json!("DEPLOYED"),
            }
        );

        let resolved = apply(
            &mut proxy,
            &Operation::Resolve {
                namespace: "ns".to_string(),
                values: String::new(),
                chart: Chart::new("nginx", "1.0.0"),
            },
        )
        .unwrap();
        assert_eq!(
            resolved,
            Outcome::Ok {
                op: "resolve".to_string(),
                result: serde_json::json!(""),
            }
        );
    }

    #[test]
    fn test_describe() {
        let op = Operation::List {
            namespace: String::new(),
            limit: Some(3),
        };
        assert_eq!(op.describe(), "list * (limit 3)");
        let op = Operation::Delete {
            name: "foo".to_string(),
            namespace: String::new(),
        };
        assert_eq!(op.describe(), "delete foo");
    }
}
