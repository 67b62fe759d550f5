//! Flat-rate shipping core - domain models, rate provider stages, and repository traits.
//!
//! This crate prices carts with per-shop flat shipping rates as one stage of a
//! multi-provider rate pipeline. It is storage-agnostic: configuration and the
//! shipping method catalog are read through the repository traits in
//! [`packages`] and [`shipping`].

pub mod cart;
pub mod constants;
pub mod errors;
pub mod packages;
pub mod rates;
pub mod shipping;

pub use rates::{
    FlatRateShippingService, RateContext, RateError, RateQuote, RetryMarker, ShippingRate,
    ShippingRateProviderTrait, ShippingRatesService, StageResult,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
