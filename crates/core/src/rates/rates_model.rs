//! Shipping rate result models shared by every rate provider.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shipping::ShippingMethod;

/// Caller context for a rate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateContext {
    pub shop_id: String,
}

impl RateContext {
    pub fn new(shop_id: impl Into<String>) -> Self {
        RateContext {
            shop_id: shop_id.into(),
        }
    }
}

/// A priced shipping option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    pub carrier: String,
    pub method: ShippingMethod,
    pub rate: Decimal,
    pub shop_id: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Error,
}

/// A provider-level failure reported alongside quotes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateError {
    pub request_status: RequestStatus,
    pub shipping_provider: String,
    pub message: String,
}

impl RateError {
    pub fn new(shipping_provider: &str, message: &str) -> Self {
        RateError {
            request_status: RequestStatus::Error,
            shipping_provider: shipping_provider.to_string(),
            message: message.to_string(),
        }
    }
}

/// One entry of the rate list: a quote or an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ShippingRate {
    Quote(RateQuote),
    Error(RateError),
}

impl ShippingRate {
    pub fn as_quote(&self) -> Option<&RateQuote> {
        match self {
            ShippingRate::Quote(quote) => Some(quote),
            ShippingRate::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&RateError> {
        match self {
            ShippingRate::Error(error) => Some(error),
            ShippingRate::Quote(_) => None,
        }
    }
}

impl From<RateQuote> for ShippingRate {
    fn from(quote: RateQuote) -> Self {
        ShippingRate::Quote(quote)
    }
}

impl From<RateError> for ShippingRate {
    fn from(error: RateError) -> Self {
        ShippingRate::Error(error)
    }
}

/// Identity of a stage that asked to be run again on a later pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct RetryMarker {
    pub package_name: String,
    pub file_name: String,
}

impl RetryMarker {
    pub fn new(package_name: &str, file_name: &str) -> Self {
        RetryMarker {
            package_name: package_name.to_string(),
            file_name: file_name.to_string(),
        }
    }
}

/// Accumulated output of the stages run so far.
///
/// Each stage takes the previous value by move and returns the next one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StageResult {
    pub rates: Vec<ShippingRate>,
    pub retrial_targets: Vec<RetryMarker>,
}

impl StageResult {
    pub fn new(rates: Vec<ShippingRate>, retrial_targets: Vec<RetryMarker>) -> Self {
        StageResult {
            rates,
            retrial_targets,
        }
    }

    /// Result holding a single error and no retry markers.
    pub fn from_error(error: RateError) -> Self {
        StageResult::new(vec![error.into()], Vec::new())
    }

    pub fn quotes(&self) -> impl Iterator<Item = &RateQuote> {
        self.rates.iter().filter_map(ShippingRate::as_quote)
    }

    pub fn errors(&self) -> impl Iterator<Item = &RateError> {
        self.rates.iter().filter_map(ShippingRate::as_error)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty() && self.retrial_targets.is_empty()
    }

    pub fn into_parts(self) -> (Vec<ShippingRate>, Vec<RetryMarker>) {
        (self.rates, self.retrial_targets)
    }
}

impl From<(Vec<ShippingRate>, Vec<RetryMarker>)> for StageResult {
    fn from((rates, retrial_targets): (Vec<ShippingRate>, Vec<RetryMarker>)) -> Self {
        StageResult::new(rates, retrial_targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn error_serializes_with_request_status() {
        let error = RateError::new("flat-rate-shipping", "this cart has no items");
        let value = serde_json::to_value(ShippingRate::from(error)).unwrap();
        assert_eq!(
            value,
            json!({
                "requestStatus": "error",
                "shippingProvider": "flat-rate-shipping",
                "message": "this cart has no items"
            })
        );
    }

    #[test]
    fn mixed_rate_list_round_trips_by_shape() {
        let rates: Vec<ShippingRate> = serde_json::from_value(json!([
            {
                "carrier": "Acme",
                "method": {"name": "ground", "enabled": true, "rate": 5, "handling": 2},
                "rate": 7,
                "shopId": "shop-1"
            },
            {"requestStatus": "error", "shippingProvider": "ups", "message": "timeout"}
        ]))
        .unwrap();

        let result = StageResult::new(rates, Vec::new());
        let quotes: Vec<_> = result.quotes().collect();
        let errors: Vec<_> = result.errors().collect();

        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].rate, dec!(7));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].shipping_provider, "ups");
    }

    #[test]
    fn stage_result_serializes_as_camel_case_pair() {
        let result = StageResult::new(
            Vec::new(),
            vec![RetryMarker::new("flat-rate-shipping", "hooks")],
        );
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "rates": [],
                "retrialTargets": [{"packageName": "flat-rate-shipping", "fileName": "hooks"}]
            })
        );
    }
}
