//! Order endpoints: create, look up and list exchange orders.

mod types;

pub use types::*;

use reqwest::Method;

use crate::rest::CoinSwitchClient;
use crate::rest::endpoints::order;
use crate::rest::params::Params;
use crate::rest::request::Request;
use crate::types::ItemsList;

impl CoinSwitchClient {
    /// Create an exchange order.
    ///
    /// The parameters are sent as-is; CoinSwitch validates them.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinswitch_api_client::auth::Credentials;
    /// use coinswitch_api_client::rest::CoinSwitchClient;
    /// use coinswitch_api_client::rest::order::NewOrderParams;
    /// use coinswitch_api_client::types::Address;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinSwitchClient::new(Credentials::new("access_key"));
    ///     let params = NewOrderParams::new("btc", "eth", Address::new("0x1234"))
    ///         .deposit_coin_amount("0.5".parse()?);
    ///
    ///     let order = client.create_order(&params).await?;
    ///     println!("Send BTC to {}", order.exchange_address.address);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_order(&self, params: &NewOrderParams) -> Request<NewOrder> {
        self.request(Method::POST, order::ORDER, params.to_params())
    }

    /// Get the current state of an order.
    ///
    /// # Arguments
    ///
    /// * `id` - Order id returned by `create_order`.
    pub fn get_order(&self, id: &str) -> Request<Order> {
        let path = format!("{}/{}", order::ORDER, urlencoding::encode(id));
        self.request(Method::GET, path, Params::new())
    }

    /// List all created orders.
    pub fn get_orders(&self) -> Request<ItemsList<Order>> {
        self.request(Method::GET, order::ORDERS, Params::new())
    }
}
