//! Package configuration models.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{MARKETPLACE_PACKAGE, SHIPPING_RATES_PACKAGE};
use crate::errors::Result;

/// Filter for a single package document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageQuery {
    pub name: String,
    pub shop_id: String,
    /// When set, only packages with this `enabled` value match.
    pub enabled: Option<bool>,
}

impl PackageQuery {
    pub fn new(name: &str, shop_id: &str) -> Self {
        PackageQuery {
            name: name.to_string(),
            shop_id: shop_id.to_string(),
            enabled: None,
        }
    }

    pub fn enabled_only(mut self) -> Self {
        self.enabled = Some(true);
        self
    }

    /// Query for the flat-rate toggle package of a shop.
    pub fn flat_rates(shop_id: &str) -> Self {
        Self::new(SHIPPING_RATES_PACKAGE, shop_id)
    }

    /// Query for the enabled marketplace package of a shop.
    pub fn marketplace(shop_id: &str) -> Self {
        Self::new(MARKETPLACE_PACKAGE, shop_id).enabled_only()
    }

    pub fn matches(&self, package: &PackageConfig) -> bool {
        package.name == self.name
            && package.shop_id == self.shop_id
            && self.enabled.map_or(true, |enabled| package.enabled == enabled)
    }
}

/// A stored package document. `settings` is free-form until decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageConfig {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub shop_id: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub settings: serde_json::Value,
}

impl PackageConfig {
    /// Decode `settings` into a typed structure. An absent document yields the default.
    pub fn settings_as<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.settings.is_null() {
            return Ok(T::default());
        }
        Ok(serde_json::from_value(self.settings.clone())?)
    }
}

/// Decode an optional settings field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode package settings, falling back to defaults when the document is not an object.
fn settings_or_default<T>(package: &PackageConfig) -> T
where
    T: DeserializeOwned + Default,
{
    package.settings_as().unwrap_or_else(|err| {
        warn!(
            "Ignoring malformed settings of package {} for shop {}: {}",
            package.name, package.shop_id, err
        );
        T::default()
    })
}

/// Typed settings of the shipping-rates package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FlatRateSettings {
    #[serde(deserialize_with = "lenient")]
    pub flat_rates: Option<FlatRatesToggle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FlatRatesToggle {
    #[serde(deserialize_with = "lenient")]
    pub enabled: Option<bool>,
}

impl FlatRateSettings {
    pub fn from_package(package: &PackageConfig) -> Self {
        settings_or_default(package)
    }

    /// Flat rates are on only when the toggle is explicitly `true`.
    pub fn is_enabled(&self) -> bool {
        self.flat_rates
            .as_ref()
            .and_then(|toggle| toggle.enabled)
            .unwrap_or(false)
    }
}

/// Marketplace configuration of a shop.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketplaceSettings {
    #[serde(deserialize_with = "lenient")]
    pub enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub settings: Option<MarketplacePackageSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketplacePackageSettings {
    #[serde(deserialize_with = "lenient")]
    pub enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub public: Option<MarketplacePublicSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketplacePublicSettings {
    #[serde(deserialize_with = "lenient")]
    pub merchant_shipping_rates: Option<bool>,
}

impl MarketplaceSettings {
    /// Build from a marketplace package document.
    pub fn from_package(package: &PackageConfig) -> Self {
        MarketplaceSettings {
            enabled: Some(package.enabled),
            settings: Some(settings_or_default(package)),
        }
    }

    /// True when every shop in a cart is expected to supply its own shipping rates.
    pub fn delegates_shipping_rates(&self) -> bool {
        let Some(settings) = self.settings.as_ref() else {
            return false;
        };
        let merchant_rates = settings
            .public
            .as_ref()
            .and_then(|public| public.merchant_shipping_rates)
            .unwrap_or(false);

        self.enabled.unwrap_or(false) && settings.enabled.unwrap_or(false) && merchant_rates
    }
}
