//! CoinSwitch REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::auth::Credentials;
use crate::rest::endpoints::COINSWITCH_BASE_URL;
use crate::rest::params::Params;
use crate::rest::request::Request;

/// The CoinSwitch REST API client.
///
/// Every endpoint method returns a [`Request`] that has not been sent yet.
/// Execute it with [`Request::execute`] or simply `.await` it.
///
/// # Example
///
/// ```rust,no_run
/// use coinswitch_api_client::auth::Credentials;
/// use coinswitch_api_client::rest::CoinSwitchClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinSwitchClient::new(Credentials::new("access_key"));
///
///     let coins = client.get_coins().await?;
///     println!("{} coins supported", coins.len());
///
///     Ok(())
/// }
/// ```
///
/// Forwarding the end-user IP and pointing at another server:
///
/// ```rust,no_run
/// use coinswitch_api_client::auth::Credentials;
/// use coinswitch_api_client::rest::CoinSwitchClient;
///
/// let credentials = Credentials::new("access_key").with_ip("203.0.113.7");
/// let client = CoinSwitchClient::builder(credentials)
///     .base_url("https://sandbox.example.com/v2")
///     .build();
/// ```
#[derive(Clone)]
pub struct CoinSwitchClient {
    http_client: ClientWithMiddleware,
    base_url: Arc<str>,
    credentials: Arc<Credentials>,
}

impl CoinSwitchClient {
    /// Create a client for the production API with default settings.
    pub fn new(credentials: Credentials) -> Self {
        Self::builder(credentials).build()
    }

    /// Create a new client builder.
    pub fn builder(credentials: Credentials) -> CoinSwitchClientBuilder {
        CoinSwitchClientBuilder::new(credentials)
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credentials attached to every request.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Prepare a request for an endpoint.
    pub(crate) fn request<T>(
        &self,
        method: Method,
        path: impl Into<String>,
        params: Params,
    ) -> Request<T> {
        Request::new(
            self.http_client.clone(),
            Arc::clone(&self.base_url),
            method,
            path,
            params,
            Arc::clone(&self.credentials),
        )
    }
}

impl std::fmt::Debug for CoinSwitchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinSwitchClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Builder for [`CoinSwitchClient`].
pub struct CoinSwitchClientBuilder {
    base_url: String,
    credentials: Credentials,
    http_client: Option<ClientWithMiddleware>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl CoinSwitchClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            base_url: COINSWITCH_BASE_URL.to_string(),
            credentials,
            http_client: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL (alternative servers, or a mock server in tests).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use a caller-supplied HTTP transport.
    ///
    /// When set, `user_agent` and `timeout` are ignored; configure them on
    /// the supplied client instead.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a total timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinSwitchClient {
        let http_client = match self.http_client {
            Some(client) => client,
            None => default_http_client(self.user_agent, self.timeout),
        };

        CoinSwitchClient {
            http_client,
            base_url: Arc::from(self.base_url.trim_end_matches('/')),
            credentials: Arc::new(self.credentials),
        }
    }
}

fn default_http_client(user_agent: Option<String>, timeout: Option<Duration>) -> ClientWithMiddleware {
    let mut headers = HeaderMap::new();
    let user_agent =
        user_agent.unwrap_or_else(|| format!("coinswitch-api-client/{}", env!("CARGO_PKG_VERSION")));
    let header_value = HeaderValue::from_str(&user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("coinswitch-api-client"));
    headers.insert(USER_AGENT, header_value);

    let mut builder = reqwest::Client::builder().default_headers(headers);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

    ClientBuilder::new(reqwest_client)
        .with(TracingMiddleware::default())
        .build()
}
