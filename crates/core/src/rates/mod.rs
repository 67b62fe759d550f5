//! Rates module - rate provider stages and the service that drives them.
//!
//! Providers share one accumulated [`StageResult`]: quotes and provider errors
//! in a single list, plus the roster of providers asking to be run again.

mod flat_rate_service;
mod rates_model;
mod rates_service;
mod rates_traits;

pub use flat_rate_service::{
    FlatRateShippingService, INCOMPLETE_ADDRESS_MESSAGE, MISSING_SHIPPING_MESSAGE,
    NO_ITEMS_MESSAGE, NO_METHODS_MESSAGE,
};
pub use rates_model::{
    RateContext, RateError, RateQuote, RequestStatus, RetryMarker, ShippingRate, StageResult,
};
pub use rates_service::ShippingRatesService;
pub use rates_traits::ShippingRateProviderTrait;

#[cfg(test)]
mod test_support;
