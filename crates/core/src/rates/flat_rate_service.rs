use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::cart::Cart;
use crate::constants::{FLAT_RATE_FILE_NAME, FLAT_RATE_PACKAGE_NAME};
use crate::errors::{Error, Result};
use crate::packages::{FlatRateSettings, MarketplaceSettings, PackageQuery, PackageRepositoryTrait};
use crate::shipping::{ShippingConfig, ShippingRepositoryTrait};

use super::rates_model::{RateContext, RateError, RateQuote, RetryMarker, ShippingRate, StageResult};
use super::rates_traits::ShippingRateProviderTrait;

pub const MISSING_SHIPPING_MESSAGE: &str = "this cart is missing shipping records";
pub const INCOMPLETE_ADDRESS_MESSAGE: &str =
    "The address property on one or more shipping records are incomplete";
pub const NO_ITEMS_MESSAGE: &str = "this cart has no items";
pub const NO_METHODS_MESSAGE: &str = "Flat rate shipping did not return any shipping methods.";

/// Flat-rate shipping stage of the rate pipeline.
pub struct FlatRateShippingService {
    package_repository: Arc<dyn PackageRepositoryTrait>,
    shipping_repository: Arc<dyn ShippingRepositoryTrait>,
}

impl FlatRateShippingService {
    pub fn new(
        package_repository: Arc<dyn PackageRepositoryTrait>,
        shipping_repository: Arc<dyn ShippingRepositoryTrait>,
    ) -> Self {
        FlatRateShippingService {
            package_repository,
            shipping_repository,
        }
    }

    fn stage_error(message: &str) -> RateError {
        RateError::new(FLAT_RATE_PACKAGE_NAME, message)
    }

    /// True when a non-empty roster names no stage sharing either half of our identity.
    ///
    /// A marker equal on just one field keeps the stage running.
    fn is_not_among_failed_requests(retrial_targets: &[RetryMarker]) -> bool {
        retrial_targets.iter().all(|target| {
            target.package_name != FLAT_RATE_PACKAGE_NAME && target.file_name != FLAT_RATE_FILE_NAME
        })
    }

    /// Cart shape checks, in order. Returns the first failure.
    fn validate_cart(cart: &Cart) -> Option<RateError> {
        if cart.shipping.is_empty() {
            return Some(Self::stage_error(MISSING_SHIPPING_MESSAGE));
        }
        if cart.has_incomplete_address() {
            return Some(Self::stage_error(INCOMPLETE_ADDRESS_MESSAGE));
        }
        if cart.items.is_empty() {
            return Some(Self::stage_error(NO_ITEMS_MESSAGE));
        }
        None
    }

    async fn ensure_single_shop_rates(&self, shop_id: &str) -> Result<()> {
        let Some(package) = self
            .package_repository
            .find_package(&PackageQuery::marketplace(shop_id))
            .await?
        else {
            return Ok(());
        };

        if MarketplaceSettings::from_package(&package).delegates_shipping_rates() {
            return Err(Error::NotImplemented(
                "Multiple shipping providers is currently not implemented".to_string(),
            ));
        }
        Ok(())
    }

    async fn flat_rates_enabled(&self, shop_id: &str) -> Result<bool> {
        let package = self
            .package_repository
            .find_package(&PackageQuery::flat_rates(shop_id))
            .await?;

        Ok(package
            .map(|package| FlatRateSettings::from_package(&package).is_enabled())
            .unwrap_or(false))
    }

    /// Quotes for every enabled method of the given configurations.
    fn quotes_for(configs: &[ShippingConfig]) -> Vec<RateQuote> {
        configs
            .iter()
            .flat_map(|config| {
                config.enabled_methods().map(move |method| {
                    let method = method.with_defaults(&config.provider.label);
                    RateQuote {
                        carrier: method.carrier.clone().unwrap_or_default(),
                        rate: method.total_rate(),
                        shop_id: config.shop_id.clone(),
                        method,
                    }
                })
            })
            .collect()
    }
}

#[async_trait]
impl ShippingRateProviderTrait for FlatRateShippingService {
    fn identity(&self) -> RetryMarker {
        RetryMarker::new(FLAT_RATE_PACKAGE_NAME, FLAT_RATE_FILE_NAME)
    }

    async fn resolve(
        &self,
        context: &RateContext,
        cart: &Cart,
        previous: StageResult,
    ) -> Result<StageResult> {
        if !previous.retrial_targets.is_empty()
            && Self::is_not_among_failed_requests(&previous.retrial_targets)
        {
            debug!("Flat rate shipping not due for retry, skipping");
            return Ok(previous);
        }

        if let Some(error) = Self::validate_cart(cart) {
            info!("Flat rate shipping rejected cart: {}", error.message);
            return Ok(StageResult::from_error(error));
        }

        self.ensure_single_shop_rates(&context.shop_id).await?;

        if !self.flat_rates_enabled(&context.shop_id).await? {
            debug!(
                "Flat rate shipping disabled for shop {}, passing results through",
                context.shop_id
            );
            return Ok(previous);
        }

        let (mut rates, mut retrial_targets) = previous.into_parts();
        let initial_count = rates.len();

        let shop_ids = cart.shipping_shop_ids();
        let configs = self
            .shipping_repository
            .find_enabled_by_shop_ids(&shop_ids)
            .await?;

        rates.extend(Self::quotes_for(&configs).into_iter().map(ShippingRate::from));

        if rates.len() == initial_count {
            warn!(
                "Flat rate shipping found no enabled methods for shops {:?}",
                shop_ids
            );
            rates.push(Self::stage_error(NO_METHODS_MESSAGE).into());
            retrial_targets.push(self.identity());
            return Ok(StageResult::new(rates, retrial_targets));
        }

        debug!("Flat rate shipping rates: {:?}", rates);
        Ok(StageResult::new(rates, retrial_targets))
    }
}
