//! Repository traits for shipping configuration.

use async_trait::async_trait;

use crate::errors::Result;
use crate::shipping::ShippingConfig;

/// Read access to the shipping configuration catalog.
#[async_trait]
pub trait ShippingRepositoryTrait: Send + Sync {
    /// Configurations whose `shopId` is in `shop_ids` and whose provider is enabled,
    /// in storage order.
    async fn find_enabled_by_shop_ids(&self, shop_ids: &[String]) -> Result<Vec<ShippingConfig>>;
}
