//! The release proxy contract and its in-memory implementation.
//!
//! Harness code is written against [`ReleaseProxy`]; tests plug in a
//! [`FakeProxy`] instead of a backend talking to a cluster.

mod fake;

pub use fake::FakeProxy;

use crate::chart::Chart;
use crate::error::Result;
use crate::release::{AppOverview, Release, StatusCode};

/// Operations a release-management proxy exposes
pub trait ReleaseProxy {
    /// List summaries of releases in `namespace` (empty for all namespaces)
    fn list_releases(&self, namespace: &str, limit: usize) -> Result<Vec<AppOverview>>;

    /// Fetch a release by name
    fn get_release(&self, name: &str, namespace: &str) -> Result<Release>;

    /// Install a new release of `chart` with the given values
    fn create_release(
        &mut self,
        name: &str,
        namespace: &str,
        values: &str,
        chart: &Chart,
    ) -> Result<Release>;

    /// Upgrade an existing release to `chart` with the given values
    fn update_release(
        &mut self,
        name: &str,
        namespace: &str,
        values: &str,
        chart: &Chart,
    ) -> Result<Release>;

    /// Remove a release
    fn delete_release(&mut self, name: &str, namespace: &str) -> Result<()>;

    /// Current status of a release
    fn get_release_status(&self, name: &str) -> Result<StatusCode>;

    /// Render the manifest `chart` would produce with `values`
    fn resolve_manifest(&self, namespace: &str, values: &str, chart: &Chart) -> Result<String>;
}
