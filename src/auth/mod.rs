//! Authentication module for the CoinSwitch API.
//!
//! CoinSwitch authenticates every request with an access key header and,
//! optionally, the IP address of the end user.

mod credentials;

pub use credentials::{API_KEY_ENV, API_KEY_HEADER, Credentials, USER_IP_ENV, USER_IP_HEADER};
