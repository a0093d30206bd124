/*
[INPUT]:  HTTP configuration (base URL, host header, timeouts)
[OUTPUT]: Configured async reqwest client and the shared request core
[POS]:    HTTP layer - request composition, dispatch, error mapping
[UPDATE]: When adding connection options or changing the wire protocol
*/

use std::time::Duration;

use reqwest::Client;
use reqwest::header::HOST;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::coins::ticker_path;
use crate::http::error::{Result, gateway_check};

/// Base URL for the CryptAPI gateway
pub const CRYPTAPI_URL: &str = "https://api.cryptapi.io/";

/// Host header expected by the gateway's fronting infrastructure
pub const CRYPTAPI_HOST: &str = "api.cryptapi.io";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Parse a base URL, guaranteeing a trailing slash so path concatenation in
/// [`request_url`] stays well-formed.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url> {
    if base_url.ends_with('/') {
        Ok(Url::parse(base_url)?)
    } else {
        Ok(Url::parse(&format!("{base_url}/"))?)
    }
}

/// Compose the gateway request URL for a coin-scoped endpoint.
///
/// An empty coin yields `<base><endpoint>/`; a normalized ticker is expanded
/// back into path segments, so `bep20_usdt` + `create` becomes
/// `<base>bep20/usdt/create/`.
pub(crate) fn request_url(base_url: &Url, coin: &str, endpoint: &str) -> String {
    format!("{base_url}{}{endpoint}/", ticker_path(coin))
}

/// Async HTTP client for the CryptAPI gateway
#[derive(Debug, Clone)]
pub struct CryptApiClient {
    http_client: Client,
    base_url: Url,
    host: String,
}

impl CryptApiClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, CRYPTAPI_URL, CRYPTAPI_HOST)
    }

    /// Create a client against an alternate base URL and host header.
    ///
    /// Intended for tests pointing at a mock gateway.
    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        host: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(base_url)?,
            host: host.to_string(),
        })
    }

    /// Base URL this client targets
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform one gateway request.
    ///
    /// Issues a GET against `<base><coin-path><endpoint>/` with the given
    /// query parameters and the fixed `Host` header, decodes the JSON body,
    /// and maps the gateway's error convention onto `CryptApiError`.
    pub(crate) async fn request(
        &self,
        coin: &str,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value> {
        let url = request_url(&self.base_url, coin, endpoint);
        debug!(url = %url, endpoint, "gateway request");

        let response = self
            .http_client
            .get(&url)
            .query(params)
            .header(HOST, &self.host)
            .send()
            .await?;

        let body = response.text().await?;
        let decoded: Value = serde_json::from_str(&body)?;

        gateway_check(decoded)
    }
}
