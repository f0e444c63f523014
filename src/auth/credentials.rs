//! Credential management for CoinSwitch API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Header carrying the CoinSwitch access key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the IP address of the end user.
pub const USER_IP_HEADER: &str = "x-user-ip";

/// Default environment variable holding the access key.
pub const API_KEY_ENV: &str = "COINSWITCH_API_KEY";

/// Default environment variable holding the end-user IP.
pub const USER_IP_ENV: &str = "COINSWITCH_USER_IP";

/// API credentials: the access key issued by CoinSwitch and an optional user IP.
///
/// The key is not validated locally. A wrong key is reported by the server
/// when a request is executed.
#[derive(Clone)]
pub struct Credentials {
    api_key: SecretString,
    /// IP address of the end user on whose behalf requests are made
    pub user_ip: Option<String>,
}

impl Credentials {
    /// Create credentials from an access key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            user_ip: None,
        }
    }

    /// Attach the end-user IP sent as `x-user-ip`.
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.user_ip = Some(ip.into());
        self
    }

    /// Get the access key.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Header pairs attached to every request.
    pub fn headers(&self) -> Vec<(&'static str, &str)> {
        let mut headers = vec![(API_KEY_HEADER, self.expose_key())];
        if let Some(ip) = &self.user_ip {
            headers.push((USER_IP_HEADER, ip.as_str()));
        }
        headers
    }

    /// Try to read credentials from `COINSWITCH_API_KEY` and `COINSWITCH_USER_IP`.
    ///
    /// Returns `None` if the key variable is not set. The IP variable is optional.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(API_KEY_ENV, USER_IP_ENV)
    }

    /// Try to read credentials from custom environment variable names.
    pub fn try_from_env_vars(key_var: &str, ip_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let user_ip = std::env::var(ip_var).ok().filter(|ip| !ip.is_empty());

        Some(Self {
            api_key: SecretString::from(api_key),
            user_ip,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("user_ip", &self.user_ip)
            .finish()
    }
}
