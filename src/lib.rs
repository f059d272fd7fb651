//! # Release Proxy
//!
//! In-memory stand-in for a release-management proxy, for use in tests.
//!
//! [`FakeProxy`] implements the [`ReleaseProxy`] contract over a plain vector
//! of [`Release`] records. It answers list, get, create, update, delete,
//! status and manifest calls without a chart repository or a cluster.
//!
//! ## Behavior worth knowing
//!
//! - Listing honors the namespace filter; get, update and delete match on
//!   name only.
//! - A listing returns up to `limit + 1` entries.
//! - Update returns the stored release without changing it.
//! - Delete moves the last release into the freed slot, so store order is
//!   not stable across deletes.
//! - Status is always `DEPLOYED` and manifests are always empty.
//!
//! ## Usage
//!
//! ```
//! use release_proxy::{Chart, FakeProxy, ReleaseProxy};
//!
//! let mut proxy = FakeProxy::new();
//! proxy.create_release("foo", "ns1", "", &Chart::default()).unwrap();
//! proxy.create_release("bar", "ns2", "", &Chart::default()).unwrap();
//!
//! let listed = proxy.list_releases("ns1", 10).unwrap();
//! assert_eq!(listed.len(), 1);
//! assert_eq!(listed[0].release_name, "foo");
//! ```
//!
//! The `release_proxy` binary replays a JSON scenario against a fresh proxy:
//!
//! ```bash
//! release_proxy scenario.json          # Colored outcome per operation
//! release_proxy scenario.json --json   # Outcomes and final store as JSON
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod proxy;
pub mod release;
pub mod scenario;

// Re-export main types for public API
pub use chart::Chart;
pub use cli::Args;
pub use config::ProxyConfig;
pub use error::{CliError, ProxyError, ReleaseError, Result, ScenarioError};
pub use proxy::{FakeProxy, ReleaseProxy};
pub use release::{AppOverview, Release, StatusCode};
pub use scenario::{Operation, Outcome, Scenario, ScenarioReport};
