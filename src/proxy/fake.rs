//! In-memory release proxy for tests.
//!
//! Releases live in a plain vector and every lookup is a linear scan by name.
//! Only listing honors the namespace argument.

use super::ReleaseProxy;
use crate::chart::Chart;
use crate::config::ProxyConfig;
use crate::error::{ReleaseError, Result};
use crate::release::{AppOverview, Release, StatusCode};

/// Release proxy backed by an in-memory list of releases
#[derive(Debug, Clone, Default)]
pub struct FakeProxy {
    releases: Vec<Release>,
    config: ProxyConfig,
}

impl FakeProxy {
    /// Create an empty proxy with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty proxy with the given configuration
    pub fn with_config(config: ProxyConfig) -> Self {
        Self {
            releases: Vec::new(),
            config,
        }
    }

    /// Seed the proxy with existing releases
    ///
    /// Names are taken as given; duplicates are not rejected here.
    pub fn with_releases(mut self, releases: Vec<Release>) -> Self {
        self.releases = releases;
        self
    }

    /// Releases currently held, in store order
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// Number of releases held
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether the store holds no releases
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Proxy configuration
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.releases.iter().position(|r| r.name == name)
    }

    fn not_found(name: &str) -> ReleaseError {
        ReleaseError::NotFound {
            name: name.to_string(),
        }
    }
}

impl ReleaseProxy for FakeProxy {
    /// Accepts a release while the result holds no more than `limit`
    /// entries, so up to `limit + 1` overviews come back.
    fn list_releases(&self, namespace: &str, limit: usize) -> Result<Vec<AppOverview>> {
        let mut res = Vec::new();
        for release in &self.releases {
            if release.in_namespace(namespace) && res.len() <= limit {
                res.push(release.overview());
            }
        }
        log::debug!(
            "Listed {} of {} releases (namespace={:?}, limit={})",
            res.len(),
            self.releases.len(),
            namespace,
            limit
        );
        Ok(res)
    }

    fn get_release(&self, name: &str, _namespace: &str) -> Result<Release> {
        self.releases
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or_else(|| Self::not_found(name).into())
    }

    fn create_release(
        &mut self,
        name: &str,
        namespace: &str,
        _values: &str,
        chart: &Chart,
    ) -> Result<Release> {
        if self.position(name).is_some() {
            return Err(ReleaseError::AlreadyExists {
                name: name.to_string(),
            }
            .into());
        }

        let release = Release::new(name, namespace);
        self.releases.push(release.clone());
        log::debug!("Created release {} in {:?} from chart {}", name, namespace, chart);
        Ok(release)
    }

    /// Returns the stored release untouched; values and chart are ignored.
    fn update_release(
        &mut self,
        name: &str,
        namespace: &str,
        _values: &str,
        _chart: &Chart,
    ) -> Result<Release> {
        let release = self.get_release(name, namespace)?;
        log::trace!("Update of {} is a no-op", name);
        Ok(release)
    }

    fn delete_release(&mut self, name: &str, _namespace: &str) -> Result<()> {
        let index = self.position(name).ok_or_else(|| Self::not_found(name))?;
        // Order of the remaining releases is not preserved.
        self.releases.swap_remove(index);
        log::debug!("Deleted release {} ({} remaining)", name, self.releases.len());
        Ok(())
    }

    fn get_release_status(&self, _name: &str) -> Result<StatusCode> {
        Ok(StatusCode::Deployed)
    }

    fn resolve_manifest(&self, _namespace: &str, _values: &str, _chart: &Chart) -> Result<String> {
        Ok(String::new())
    }
}
