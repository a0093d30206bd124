/*
[INPUT]:  HTTP configuration and payment session state
[OUTPUT]: Gateway responses via a thread-blocking transport
[POS]:    HTTP layer - blocking front-end over the shared request core
[UPDATE]: When the async surface changes (both front-ends stay identical)
*/

use std::collections::HashMap;

use reqwest::blocking::Client;
use reqwest::header::HOST;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::coins::{normalize_ticker, supported_coins_from_info};
use crate::http::client::{
    CRYPTAPI_HOST, CRYPTAPI_URL, ClientConfig, parse_base_url, request_url,
};
use crate::http::error::{Result, gateway_check};
use crate::session::PaymentSession;

/// Blocking HTTP client for the CryptAPI gateway.
///
/// Same operations and observable behavior as
/// [`CryptApiClient`](crate::http::CryptApiClient), but every call blocks the
/// current thread until the gateway responds. Must not be used from within an
/// async runtime.
#[derive(Debug, Clone)]
pub struct BlockingCryptApiClient {
    http_client: Client,
    base_url: Url,
    host: String,
}

impl BlockingCryptApiClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, CRYPTAPI_URL, CRYPTAPI_HOST)
    }

    /// Create a client against an alternate base URL and host header
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

    fn request(&self, coin: &str, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        let url = request_url(&self.base_url, coin, endpoint);
        debug!(url = %url, endpoint, "gateway request (blocking)");

        let response = self
            .http_client
            .get(&url)
            .query(params)
            .header(HOST, &self.host)
            .send()?;

        let body = response.text()?;
        let decoded: Value = serde_json::from_str(&body)?;

        gateway_check(decoded)
    }

    /// Request a fresh payment address, caching `address_in` on the session
    pub fn create_address(&self, session: &mut PaymentSession) -> Result<Value> {
        let params = session.create_params();
        let response = self.request(session.coin(), "create", &params)?;

        if let Some(address) = response.get("address_in").and_then(Value::as_str) {
            session.set_payment_address(address.to_string());
        }

        Ok(response)
    }

    /// Fetch notification logs for the session's callback URL
    pub fn logs(&self, session: &PaymentSession) -> Result<Value> {
        let params = session.logs_params();
        self.request(session.coin(), "logs", &params)
    }

    /// Request a QR code for the session's cached payment address
    pub fn qrcode(&self, session: &PaymentSession, value: Option<&str>, size: u32) -> Result<Value> {
        let params = session.qrcode_params(value, size);
        self.request(session.coin(), "qrcode", &params)
    }

    /// Convert a value from another currency into the session's coin
    pub fn conversion(&self, session: &PaymentSession, from_coin: &str, value: f64) -> Result<Value> {
        let params = vec![
            ("from".to_string(), from_coin.to_string()),
            ("value".to_string(), value.to_string()),
        ];
        self.request(session.coin(), "convert", &params)
    }

    /// Fetch metadata for one coin, or for all coins when `coin` is empty
    pub fn info(&self, coin: &str) -> Result<Value> {
        self.request(&normalize_ticker(coin), "info", &[])
    }

    /// Fetch the flat ticker -> display-name table of supported coins
    pub fn supported_coins(&self) -> Result<HashMap<String, String>> {
        let info = self.info("")?;
        Ok(supported_coins_from_info(&info))
    }

    /// Fetch a network fee estimate for a coin
    pub fn estimate(&self, coin: &str, addresses: u32, priority: &str) -> Result<Value> {
        let params = vec![
            ("addresses".to_string(), addresses.to_string()),
            ("priority".to_string(), priority.to_string()),
        ];
        self.request(&normalize_ticker(coin), "estimate", &params)
    }
}
