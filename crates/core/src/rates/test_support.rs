//! Mock repositories and fixtures shared by the rates tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::json;

use crate::cart::{Cart, CartItem, ShippingAddress, ShippingGroup};
use crate::constants::{MARKETPLACE_PACKAGE, SHIPPING_RATES_PACKAGE};
use crate::errors::{DatabaseError, Error, Result};
use crate::packages::{PackageConfig, PackageQuery, PackageRepositoryTrait};
use crate::shipping::{ShippingConfig, ShippingMethod, ShippingProvider, ShippingRepositoryTrait};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
pub struct MockPackageRepository {
    packages: Vec<PackageConfig>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockPackageRepository {
    pub fn new(packages: Vec<PackageConfig>) -> Self {
        Self {
            packages,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PackageRepositoryTrait for MockPackageRepository {
    async fn find_package(&self, query: &PackageQuery) -> Result<Option<PackageConfig>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Database(DatabaseError::ConnectionFailed(
                "packages unavailable".to_string(),
            )));
        }
        Ok(self.packages.iter().find(|p| query.matches(p)).cloned())
    }
}

#[derive(Default)]
pub struct MockShippingRepository {
    configs: Vec<ShippingConfig>,
    calls: AtomicUsize,
    requested_shop_ids: Mutex<Vec<Vec<String>>>,
}

impl MockShippingRepository {
    pub fn new(configs: Vec<ShippingConfig>) -> Self {
        Self {
            configs,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_shop_ids(&self) -> Vec<Vec<String>> {
        self.requested_shop_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShippingRepositoryTrait for MockShippingRepository {
    async fn find_enabled_by_shop_ids(&self, shop_ids: &[String]) -> Result<Vec<ShippingConfig>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested_shop_ids
            .lock()
            .unwrap()
            .push(shop_ids.to_vec());
        Ok(self
            .configs
            .iter()
            .filter(|c| c.provider.enabled && shop_ids.contains(&c.shop_id))
            .cloned()
            .collect())
    }
}

pub fn repositories(
    packages: Vec<PackageConfig>,
    configs: Vec<ShippingConfig>,
) -> (Arc<MockPackageRepository>, Arc<MockShippingRepository>) {
    (
        Arc::new(MockPackageRepository::new(packages)),
        Arc::new(MockShippingRepository::new(configs)),
    )
}

// ============================================================================
// Fixtures
// ============================================================================

pub const SHOP_ID: &str = "shop-1";

pub fn address() -> ShippingAddress {
    ShippingAddress {
        full_name: Some("Ada Lovelace".to_string()),
        address1: Some("1 Main St".to_string()),
        city: Some("Springfield".to_string()),
        postal: Some("12345".to_string()),
        country: Some("US".to_string()),
        ..Default::default()
    }
}

pub fn shipping_group(shop_id: &str) -> ShippingGroup {
    ShippingGroup {
        group_type: "shipping".to_string(),
        shop_id: shop_id.to_string(),
        address: Some(address()),
    }
}

pub fn item(id: &str) -> CartItem {
    CartItem {
        id: id.to_string(),
        product_id: format!("product-{}", id),
        variant_id: None,
        shop_id: Some(SHOP_ID.to_string()),
        quantity: 1,
    }
}

pub fn cart(shipping: Vec<ShippingGroup>) -> Cart {
    Cart {
        id: Some("cart-1".to_string()),
        shop_id: Some(SHOP_ID.to_string()),
        shipping,
        items: vec![item("item-1")],
    }
}

pub fn valid_cart() -> Cart {
    cart(vec![shipping_group(SHOP_ID)])
}

pub fn flat_rate_package(shop_id: &str, enabled: bool) -> PackageConfig {
    PackageConfig {
        id: None,
        name: SHIPPING_RATES_PACKAGE.to_string(),
        shop_id: shop_id.to_string(),
        enabled: true,
        settings: json!({ "flatRates": { "enabled": enabled } }),
    }
}

pub fn marketplace_package(shop_id: &str, merchant_shipping_rates: bool) -> PackageConfig {
    PackageConfig {
        id: None,
        name: MARKETPLACE_PACKAGE.to_string(),
        shop_id: shop_id.to_string(),
        enabled: true,
        settings: json!({
            "enabled": true,
            "public": { "merchantShippingRates": merchant_shipping_rates }
        }),
    }
}

pub fn method(name: &str, rate: Option<Decimal>, handling: Option<Decimal>) -> ShippingMethod {
    ShippingMethod {
        id: Some(format!("method-{}", name)),
        name: Some(name.to_string()),
        label: Some(name.to_string()),
        enabled: true,
        rate,
        handling,
        ..Default::default()
    }
}

pub fn shipping_config(shop_id: &str, label: &str, methods: Vec<ShippingMethod>) -> ShippingConfig {
    ShippingConfig {
        id: Some(format!("config-{}", shop_id)),
        shop_id: shop_id.to_string(),
        provider: ShippingProvider {
            name: Some("flatRates".to_string()),
            label: label.to_string(),
            enabled: true,
        },
        methods,
    }
}
