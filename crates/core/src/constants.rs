/// Package name this stage identifies itself with in retry markers and errors
pub const FLAT_RATE_PACKAGE_NAME: &str = "flat-rate-shipping";

/// File name half of the stage identity pair
pub const FLAT_RATE_FILE_NAME: &str = "hooks";

/// Package holding the flat-rate toggle (`settings.flatRates.enabled`)
pub const SHIPPING_RATES_PACKAGE: &str = "reaction-shipping-rates";

/// Package holding marketplace settings
pub const MARKETPLACE_PACKAGE: &str = "reaction-marketplace";

/// Fulfillment group type that flat rates apply to
pub const SHIPPING_GROUP_TYPE: &str = "shipping";

/// Number of retry passes the orchestrator runs after the initial pass
pub const MAX_RETRY_PASSES: usize = 3;
