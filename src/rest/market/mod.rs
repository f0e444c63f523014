//! Market data endpoints: coins, pairs and rates.

mod types;

pub use types::*;

use reqwest::Method;

use crate::rest::CoinSwitchClient;
use crate::rest::endpoints::market;
use crate::rest::params::Params;
use crate::rest::request::Request;

/// Parameters narrowing a pair or rate listing to one side of the exchange.
fn coin_filter(deposit_coin: Option<&str>, destination_coin: Option<&str>) -> Params {
    let mut params = Params::new();
    params
        .insert_opt("depositCoin", deposit_coin)
        .insert_opt("destinationCoin", destination_coin);
    params
}

impl CoinSwitchClient {
    /// List the coins supported by CoinSwitch.
    pub fn get_coins(&self) -> Request<Vec<Coin>> {
        self.request(Method::GET, market::COINS, Params::new())
    }

    /// List supported exchange pairs.
    ///
    /// # Arguments
    ///
    /// * `deposit_coin` - Only pairs depositing this coin.
    /// * `destination_coin` - Only pairs receiving this coin.
    pub fn get_pairs(
        &self,
        deposit_coin: Option<&str>,
        destination_coin: Option<&str>,
    ) -> Request<Vec<Pair>> {
        self.request(
            Method::POST,
            market::PAIRS,
            coin_filter(deposit_coin, destination_coin),
        )
    }

    /// Get the conversion rate for one exchange pair.
    pub fn get_rate(&self, deposit_coin: &str, destination_coin: &str) -> Request<Rate> {
        self.request(
            Method::POST,
            market::RATE,
            coin_filter(Some(deposit_coin), Some(destination_coin)),
        )
    }

    /// Get conversion rates for all supported pairs.
    ///
    /// # Arguments
    ///
    /// * `deposit_coin` - Only rates depositing this coin.
    /// * `destination_coin` - Only rates receiving this coin.
    pub fn get_rates(
        &self,
        deposit_coin: Option<&str>,
        destination_coin: Option<&str>,
    ) -> Request<Vec<CoinRate>> {
        self.request(
            Method::POST,
            market::BULK_RATE,
            coin_filter(deposit_coin, destination_coin),
        )
    }
}
