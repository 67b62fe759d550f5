//! Cart domain models.

use serde::{Deserialize, Serialize};

use crate::constants::SHIPPING_GROUP_TYPE;

/// A shopping cart as seen by the shipping rate pipeline.
///
/// Missing `shipping` or `items` deserialize to empty sequences; the pipeline
/// treats both the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub shop_id: Option<String>,
    #[serde(default)]
    pub shipping: Vec<ShippingGroup>,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// True when at least one shipping group has no address.
    pub fn has_incomplete_address(&self) -> bool {
        self.shipping.iter().any(|group| group.address.is_none())
    }

    /// Shop ids of the shipping-type groups, deduplicated in first-seen order.
    pub fn shipping_shop_ids(&self) -> Vec<String> {
        let mut shop_ids: Vec<String> = Vec::new();
        for group in self.shipping.iter().filter(|g| g.is_shipping()) {
            if !shop_ids.contains(&group.shop_id) {
                shop_ids.push(group.shop_id.clone());
            }
        }
        shop_ids
    }
}

/// One fulfillment group of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingGroup {
    #[serde(rename = "type")]
    pub group_type: String,
    pub shop_id: String,
    #[serde(default)]
    pub address: Option<ShippingAddress>,
}

impl ShippingGroup {
    pub fn is_shipping(&self) -> bool {
        self.group_type == SHIPPING_GROUP_TYPE
    }
}

/// Destination address of a shipping group. Only its presence matters to rating.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub full_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_id: String,
    #[serde(default)]
    pub variant_id: Option<String>,
    #[serde(default)]
    pub shop_id: Option<String>,
    pub quantity: u32,
}
