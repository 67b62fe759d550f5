//! Packages module - per-shop package configuration documents and their typed settings.

mod packages_model;
mod packages_traits;

pub use packages_model::{
    FlatRateSettings, FlatRatesToggle, MarketplacePackageSettings, MarketplacePublicSettings,
    MarketplaceSettings, PackageConfig, PackageQuery,
};
pub use packages_traits::PackageRepositoryTrait;
