//! Common domain types for the CoinSwitch API.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an exchange order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Waiting for the deposit to arrive
    NoDeposit,
    /// Deposit seen, waiting for confirmations
    Confirming,
    /// Deposit confirmed, exchange in progress
    Exchanging,
    /// Destination coins are being sent
    Sending,
    /// Destination coins delivered
    Complete,
    /// Deposit returned to the refund address
    Refunded,
    /// Order failed
    Failed,
    /// No deposit arrived before the order expired
    Timeout,
    /// Status not known to this client version
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Check if the order can no longer change state.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            OrderStatus::Complete | OrderStatus::Refunded | OrderStatus::Failed | OrderStatus::Timeout
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::NoDeposit => "no_deposit",
            OrderStatus::Confirming => "confirming",
            OrderStatus::Exchanging => "exchanging",
            OrderStatus::Sending => "sending",
            OrderStatus::Complete => "complete",
            OrderStatus::Refunded => "refunded",
            OrderStatus::Failed => "failed",
            OrderStatus::Timeout => "timeout",
            OrderStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// A blockchain address, with the memo/tag some networks require.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Address string
    pub address: String,
    /// Destination tag, memo or payment id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Address {
    /// Create an address without a tag.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            tag: None,
        }
    }

    /// Create an address with a tag.
    pub fn with_tag(address: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            tag: Some(tag.into()),
        }
    }
}

/// A page of items as returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsList<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Total number of items, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl<T> ItemsList<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for ItemsList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
