//! Common types used across the CoinSwitch client library.

pub mod common;

pub use common::*;
