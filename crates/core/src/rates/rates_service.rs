use std::sync::Arc;

use log::{debug, warn};

use crate::cart::Cart;
use crate::constants::MAX_RETRY_PASSES;
use crate::errors::Result;

use super::rates_model::{RateContext, RetryMarker, ShippingRate, StageResult};
use super::rates_traits::ShippingRateProviderTrait;

/// Runs every registered rate provider over a cart and re-runs the ones that ask for it.
pub struct ShippingRatesService {
    providers: Vec<Arc<dyn ShippingRateProviderTrait>>,
    max_retry_passes: usize,
}

impl ShippingRatesService {
    pub fn new(providers: Vec<Arc<dyn ShippingRateProviderTrait>>) -> Self {
        ShippingRatesService {
            providers,
            max_retry_passes: MAX_RETRY_PASSES,
        }
    }

    pub fn with_max_retry_passes(mut self, max_retry_passes: usize) -> Self {
        self.max_retry_passes = max_retry_passes;
        self
    }

    async fn run_pass(
        &self,
        providers: &[&Arc<dyn ShippingRateProviderTrait>],
        context: &RateContext,
        cart: &Cart,
        mut result: StageResult,
    ) -> Result<StageResult> {
        for provider in providers {
            result = provider.resolve(context, cart, result).await?;
        }
        Ok(result)
    }

    /// Providers whose identity appears in the roster, in registration order.
    fn rostered(&self, roster: &[RetryMarker]) -> Vec<&Arc<dyn ShippingRateProviderTrait>> {
        self.providers
            .iter()
            .filter(|provider| roster.contains(&provider.identity()))
            .collect()
    }

    /// Collect rates from all providers.
    ///
    /// The returned `retrial_targets` lists providers that still produced nothing
    /// after the last retry pass. Any provider error aborts the request.
    pub async fn get_shipping_rates(&self, context: &RateContext, cart: &Cart) -> Result<StageResult> {
        let all: Vec<_> = self.providers.iter().collect();
        let mut result = self
            .run_pass(&all, context, cart, StageResult::default())
            .await?;
        let mut pass = 0;

        while !result.retrial_targets.is_empty() && pass < self.max_retry_passes {
            pass += 1;
            let (rates, roster) = result.into_parts();
            debug!("Retry pass {} for {:?}", pass, roster);

            let rates = Self::without_errors_from(rates, &roster);
            let seen = roster.len();
            let retried = self.rostered(&roster);
            let mut next = self
                .run_pass(&retried, context, cart, StageResult::new(rates, roster))
                .await?;

            let fresh_targets = next.retrial_targets.split_off(seen.min(next.retrial_targets.len()));
            result = StageResult::new(next.rates, fresh_targets);
        }

        if !result.retrial_targets.is_empty() {
            warn!(
                "Shipping providers still empty after {} retry passes: {:?}",
                pass, result.retrial_targets
            );
        }
        Ok(result)
    }

    /// Drop error entries reported by the providers about to be retried.
    fn without_errors_from(rates: Vec<ShippingRate>, roster: &[RetryMarker]) -> Vec<ShippingRate> {
        rates
            .into_iter()
            .filter(|rate| match rate {
                ShippingRate::Error(error) => !roster
                    .iter()
                    .any(|target| target.package_name == error.shipping_provider),
                ShippingRate::Quote(_) => true,
            })
            .collect()
    }
}
