//! CoinSwitch REST API endpoint constants.

/// Base URL for the CoinSwitch v2 REST API.
pub const COINSWITCH_BASE_URL: &str = "https://api.coinswitch.co/v2";

/// Market data endpoints.
pub mod market {
    /// List supported coins.
    pub const COINS: &str = "coins";
    /// List supported exchange pairs.
    pub const PAIRS: &str = "pairs";
    /// Rate for a single pair.
    pub const RATE: &str = "rate";
    /// Rates for all supported pairs.
    pub const BULK_RATE: &str = "bulk-rate";
}

/// Order endpoints.
pub mod order {
    /// Create an order; `order/{id}` looks one up.
    pub const ORDER: &str = "order";
    /// List created orders.
    pub const ORDERS: &str = "orders";
}
