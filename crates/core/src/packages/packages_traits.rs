//! Repository traits for package configuration.

use async_trait::async_trait;

use crate::errors::Result;
use crate::packages::{PackageConfig, PackageQuery};

/// Lookup of package configuration documents keyed by name and shop.
#[async_trait]
pub trait PackageRepositoryTrait: Send + Sync {
    /// Find the single package matching the query, if any.
    async fn find_package(&self, query: &PackageQuery) -> Result<Option<PackageConfig>>;
}
