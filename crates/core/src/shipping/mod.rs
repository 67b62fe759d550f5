//! Shipping module - per-shop shipping configuration and its method catalog.

mod shipping_model;
mod shipping_traits;

pub use shipping_model::{ShippingConfig, ShippingMethod, ShippingProvider};
pub use shipping_traits::ShippingRepositoryTrait;
