//! Deferred, typed API requests.

use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::Credentials;
use crate::error::{ApiError, CoinSwitchError};
use crate::rest::params::Params;

/// A prepared call to one CoinSwitch endpoint, decoding to `T`.
///
/// Nothing is sent until [`Request::execute`] is called or the request is
/// awaited. A request is immutable and can be executed repeatedly; each
/// execution is a single HTTP round trip with no retries.
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
///     let request = client.get_rate("btc", "eth");
///     assert_eq!(request.path(), "rate");
///
///     let rate = request.await?;
///     println!("1 BTC = {} ETH", rate.rate);
///     Ok(())
/// }
/// ```
pub struct Request<T> {
    http_client: ClientWithMiddleware,
    base_url: Arc<str>,
    method: Method,
    path: String,
    params: Params,
    credentials: Arc<Credentials>,
    _result: PhantomData<fn() -> T>,
}

impl<T> Request<T> {
    pub(crate) fn new(
        http_client: ClientWithMiddleware,
        base_url: Arc<str>,
        method: Method,
        path: impl Into<String>,
        params: Params,
        credentials: Arc<Credentials>,
    ) -> Self {
        Self {
            http_client,
            base_url,
            method,
            path: path.into(),
            params,
            credentials,
            _result: PhantomData,
        }
    }

    /// HTTP method of the call.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Endpoint path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameters sent as query string (GET) or JSON body (POST).
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Base URL the path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credentials attached to the call.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Full URL of the call, including the query string for GET requests.
    pub fn url(&self) -> Result<Url, CoinSwitchError> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path
        ))?;

        if self.method == Method::GET && !self.params.is_empty() {
            let query = self
                .params
                .to_query_string()
                .map_err(|e| CoinSwitchError::InvalidParams(e.to_string()))?;
            url.set_query(Some(&query));
        }

        Ok(url)
    }
}

impl<T> Request<T>
where
    T: DeserializeOwned,
{
    /// Send the request and decode the response.
    pub async fn execute(&self) -> Result<T, CoinSwitchError> {
        let url = self.url()?;
        tracing::debug!(method = %self.method, path = %self.path, "sending CoinSwitch request");

        let mut builder = self
            .http_client
            .request(self.method.clone(), url)
            .header(ACCEPT, "application/json");
        for (name, value) in self.credentials.headers() {
            builder = builder.header(name, value);
        }
        if self.method != Method::GET {
            let body = self
                .params
                .to_json_body()
                .map_err(|e| CoinSwitchError::InvalidParams(e.to_string()))?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, path = %self.path, "CoinSwitch request failed");
            return Err(CoinSwitchError::from_status(status, body));
        }

        decode_body(status.as_u16(), body)
    }
}

impl<T> Clone for Request<T> {
    fn clone(&self) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: Arc::clone(&self.base_url),
            method: self.method.clone(),
            path: self.path.clone(),
            params: self.params.clone(),
            credentials: Arc::clone(&self.credentials),
            _result: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("base_url", &self.base_url)
            .field("path", &self.path)
            .field("params", &self.params)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl<T> IntoFuture for Request<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = Result<T, CoinSwitchError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.execute().await })
    }
}

/// CoinSwitch response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

/// Decode a successful response body into `T`.
///
/// Bodies wrapped in the `{success, code, message, data}` envelope are
/// unwrapped first; any other JSON document is decoded as `T` directly.
fn decode_body<T>(status: u16, body: String) -> Result<T, CoinSwitchError>
where
    T: DeserializeOwned,
{
    let value: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(source) => return Err(CoinSwitchError::Decode { body, source }),
    };

    let is_envelope = value
        .as_object()
        .is_some_and(|obj| obj.get("success").is_some_and(|s| s.is_boolean()));

    let payload = if is_envelope {
        match serde_json::from_value::<Envelope>(value) {
            Ok(envelope) if envelope.success => envelope.data,
            Ok(envelope) => {
                return Err(CoinSwitchError::Api(ApiError {
                    status,
                    code: envelope.code.map(|code| match code {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    }),
                    message: envelope.message,
                    body,
                }));
            }
            Err(source) => return Err(CoinSwitchError::Decode { body, source }),
        }
    } else {
        value
    };

    serde_json::from_value(payload).map_err(|source| {
        tracing::debug!(error = %source, "failed to decode CoinSwitch response");
        CoinSwitchError::Decode { body, source }
    })
}
