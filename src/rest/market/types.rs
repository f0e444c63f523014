//! Types for market data endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A coin supported by CoinSwitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    /// Coin identifier used in other calls (e.g. "btc").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the coin can currently be exchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Whether this is a fiat currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fiat: Option<bool>,
    /// Logo image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Parent chain code for tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
}

/// An exchangeable coin pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    /// Coin the user sends.
    pub deposit_coin: String,
    /// Coin the user receives.
    pub destination_coin: String,
    /// Whether the pair is currently enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Rate quote for one pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    /// Destination coins received per deposit coin.
    pub rate: Decimal,
    /// Network fee charged in the destination coin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miner_fee: Option<Decimal>,
    /// Minimum accepted deposit amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_min_deposit_coin: Option<Decimal>,
    /// Maximum accepted deposit amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_max_deposit_coin: Option<Decimal>,
    /// Minimum destination amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_min_destination_coin: Option<Decimal>,
    /// Maximum destination amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_max_destination_coin: Option<Decimal>,
}

impl Rate {
    /// Check if a deposit amount falls within the quoted limits.
    ///
    /// Missing limits are treated as unbounded.
    pub fn accepts_deposit(&self, amount: Decimal) -> bool {
        self.limit_min_deposit_coin.is_none_or(|min| amount >= min)
            && self.limit_max_deposit_coin.is_none_or(|max| amount <= max)
    }
}

/// Rate quote for a pair, as returned by the bulk rate endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinRate {
    /// Coin the user sends.
    pub deposit_coin: String,
    /// Coin the user receives.
    pub destination_coin: String,
    /// The quote itself.
    #[serde(flatten)]
    pub rate: Rate,
}
