//! Types for order endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{TimestampMilliSeconds, serde_as};
use time::OffsetDateTime;

use crate::rest::params::Params;
use crate::types::{Address, OrderStatus};

/// Request parameters for creating an exchange order.
///
/// Either `deposit_coin_amount` or `destination_coin_amount` is normally set.
/// Field rules are enforced by CoinSwitch, not by this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderParams {
    /// Coin the user sends.
    pub deposit_coin: String,
    /// Coin the user receives.
    pub destination_coin: String,
    /// Amount of the deposit coin the user sends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_coin_amount: Option<Decimal>,
    /// Amount of the destination coin the user wants to receive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_coin_amount: Option<Decimal>,
    /// Where the destination coins are delivered.
    pub destination_address: Address,
    /// Where the deposit is returned if the exchange fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_address: Option<Address>,
    /// Caller's own reference for the order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_reference_id: Option<String>,
    /// URL notified on status changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl NewOrderParams {
    /// Create order parameters with the required fields.
    pub fn new(
        deposit_coin: impl Into<String>,
        destination_coin: impl Into<String>,
        destination_address: Address,
    ) -> Self {
        Self {
            deposit_coin: deposit_coin.into(),
            destination_coin: destination_coin.into(),
            deposit_coin_amount: None,
            destination_coin_amount: None,
            destination_address,
            refund_address: None,
            user_reference_id: None,
            callback_url: None,
        }
    }

    /// Set the deposit amount.
    pub fn deposit_coin_amount(mut self, amount: Decimal) -> Self {
        self.deposit_coin_amount = Some(amount);
        self
    }

    /// Set the expected destination amount.
    pub fn destination_coin_amount(mut self, amount: Decimal) -> Self {
        self.destination_coin_amount = Some(amount);
        self
    }

    /// Set the refund address.
    pub fn refund_address(mut self, address: Address) -> Self {
        self.refund_address = Some(address);
        self
    }

    /// Set the caller reference.
    pub fn user_reference_id(mut self, id: impl Into<String>) -> Self {
        self.user_reference_id = Some(id.into());
        self
    }

    /// Set the status callback URL.
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Request body for the create order call.
    ///
    /// Amounts are sent as JSON numbers.
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .insert("depositCoin", self.deposit_coin.as_str())
            .insert("destinationCoin", self.destination_coin.as_str())
            .insert_opt("depositCoinAmount", self.deposit_coin_amount.map(decimal_value))
            .insert_opt(
                "destinationCoinAmount",
                self.destination_coin_amount.map(decimal_value),
            )
            .insert("destinationAddress", address_value(&self.destination_address))
            .insert_opt("refundAddress", self.refund_address.as_ref().map(address_value))
            .insert_opt("userReferenceId", self.user_reference_id.as_deref())
            .insert_opt("callbackUrl", self.callback_url.as_deref());
        params
    }
}

fn decimal_value(amount: Decimal) -> Value {
    let text = amount.normalize().to_string();
    match text.parse::<serde_json::Number>() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(text),
    }
}

fn address_value(address: &Address) -> Value {
    let mut map = serde_json::Map::new();
    map.insert("address".to_string(), Value::from(address.address.as_str()));
    if let Some(tag) = &address.tag {
        map.insert("tag".to_string(), Value::from(tag.as_str()));
    }
    Value::Object(map)
}

/// Response to a successful create order call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Order identifier, used with `get_order`.
    pub order_id: String,
    /// Address the user must send the deposit to.
    pub exchange_address: Address,
    /// Deposit amount CoinSwitch expects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_deposit_coin_amount: Option<Decimal>,
    /// Destination amount the user should receive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_destination_coin_amount: Option<Decimal>,
}

/// An exchange order and its current state.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier.
    pub order_id: String,
    /// Current order status.
    pub status: OrderStatus,
    /// Coin the user sends.
    pub deposit_coin: String,
    /// Coin the user receives.
    pub destination_coin: String,
    /// Amount actually deposited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_coin_amount: Option<Decimal>,
    /// Amount actually sent to the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_coin_amount: Option<Decimal>,
    /// Deposit amount quoted at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_deposit_coin_amount: Option<Decimal>,
    /// Destination amount quoted at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_destination_coin_amount: Option<Decimal>,
    /// Address the deposit goes to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_address: Option<Address>,
    /// Address the destination coins go to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_address: Option<Address>,
    /// Address refunds go to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_address: Option<Address>,
    /// Hash of the deposit transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transaction_hash: Option<String>,
    /// Hash of the payout transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_transaction_hash: Option<String>,
    /// Creation time.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    /// Deadline for the deposit.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_till: Option<OffsetDateTime>,
    /// Caller's own reference for the order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_reference_id: Option<String>,
}
