//! # CoinSwitch Client
//!
//! An async Rust client library for the CoinSwitch v2 exchange REST API.
//!
//! ## Features
//!
//! - Coin, pair and rate listings
//! - Order creation and lookup
//! - Deferred requests: build a [`rest::Request`], inspect it, then execute it
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinswitch_api_client::auth::Credentials;
//! use coinswitch_api_client::rest::CoinSwitchClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinSwitchClient::new(Credentials::new("access_key"));
//!     let pairs = client.get_pairs(Some("btc"), None).await?;
//!     println!("BTC can be exchanged into {} coins", pairs.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, CoinSwitchError};
pub use rest::{CoinSwitchClient, Request};
pub use types::{Address, ItemsList, OrderStatus};

/// Result type alias using CoinSwitchError
pub type Result<T> = std::result::Result<T, CoinSwitchError>;
