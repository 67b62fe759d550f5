use async_trait::async_trait;

use crate::cart::Cart;
use crate::errors::Result;
use crate::rates::{RateContext, RetryMarker, StageResult};

/// A single shipping rate provider stage.
#[async_trait]
pub trait ShippingRateProviderTrait: Send + Sync {
    /// Identity this stage reports in retry markers.
    fn identity(&self) -> RetryMarker;

    /// Run the stage against `previous` and return the next accumulated result.
    ///
    /// An `Err` aborts the whole rate request.
    async fn resolve(
        &self,
        context: &RateContext,
        cart: &Cart,
        previous: StageResult,
    ) -> Result<StageResult>;
}
