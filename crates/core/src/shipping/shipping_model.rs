//! Shipping configuration domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shipping configuration document of one shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingConfig {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub shop_id: String,
    pub provider: ShippingProvider,
    #[serde(default)]
    pub methods: Vec<ShippingMethod>,
}

impl ShippingConfig {
    pub fn enabled_methods(&self) -> impl Iterator<Item = &ShippingMethod> {
        self.methods.iter().filter(|method| method.enabled)
    }
}

/// Carrier that fulfills the methods of a configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingProvider {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub rate: Option<Decimal>,
    #[serde(default)]
    pub handling: Option<Decimal>,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub fulfillment_types: Vec<String>,
}

impl ShippingMethod {
    /// Copy of this method with rate, handling and carrier filled in.
    ///
    /// Missing `rate` and `handling` become zero; a missing carrier falls back to
    /// `default_carrier`. The original is left untouched.
    pub fn with_defaults(&self, default_carrier: &str) -> ShippingMethod {
        ShippingMethod {
            rate: Some(self.rate.unwrap_or(Decimal::ZERO)),
            handling: Some(self.handling.unwrap_or(Decimal::ZERO)),
            carrier: Some(
                self.carrier
                    .clone()
                    .unwrap_or_else(|| default_carrier.to_string()),
            ),
            ..self.clone()
        }
    }

    /// Price charged for this method: rate plus handling, absent values counting as zero.
    pub fn total_rate(&self) -> Decimal {
        self.rate.unwrap_or(Decimal::ZERO) + self.handling.unwrap_or(Decimal::ZERO)
    }
}
