//! CoinSwitch REST API client.
//!
//! [`CoinSwitchClient`] has one method per endpoint. Each method only
//! prepares a [`Request`]; the HTTP call happens when the request is
//! executed or awaited.
//!
//! ```rust,ignore
//! use coinswitch_api_client::rest::CoinSwitchClient;
//!
//! async fn quote(client: &CoinSwitchClient) -> coinswitch_api_client::Result<()> {
//!     let rate = client.get_rate("btc", "eth").execute().await?;
//!     println!("rate: {}", rate.rate);
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod market;
pub mod order;
mod params;
mod request;

pub use client::{CoinSwitchClient, CoinSwitchClientBuilder};
pub use endpoints::*;
pub use params::Params;
pub use request::Request;
