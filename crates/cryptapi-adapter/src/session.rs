/*
[INPUT]:  Payment configuration (coin, payout address, callback, parameters)
[OUTPUT]: Validated session state and per-endpoint query parameter sets
[POS]:    Session layer - payment configuration shared by both front-ends
[UPDATE]: When endpoint parameters or session validation rules change
*/

use std::collections::HashMap;

use crate::callback::prepare_callback_url;
use crate::coins::normalize_ticker;
use crate::http::{CryptApiError, Result};

/// One payment configuration bound to a coin, payout address, and callback.
///
/// The session is stateless between calls except for the payment address
/// cached by a successful address-creation call and read by subsequent
/// QR-code calls. Interleaving those two calls concurrently on one session
/// is a caller error: last writer wins, no locking is provided.
#[derive(Debug, Clone)]
pub struct PaymentSession {
    coin: String,
    own_address: String,
    callback_url: String,
    parameters: HashMap<String, String>,
    extra_params: HashMap<String, String>,
    payment_address: Option<String>,
}

impl PaymentSession {
    /// Create a session for one payment configuration.
    ///
    /// `parameters` are merged into the callback URL's query string and
    /// carried through the gateway's notification round-trip; `extra_params`
    /// are merged into the outgoing request's query instead (conversion and
    /// multi-token flags). Slashes in the coin ticker are normalized to
    /// underscores internally.
    ///
    /// Fails with [`CryptApiError::Config`] when coin, payout address, or
    /// callback URL is empty; no network access happens here.
    pub fn new(
        coin: impl Into<String>,
        own_address: impl Into<String>,
        callback_url: impl Into<String>,
        parameters: HashMap<String, String>,
        extra_params: HashMap<String, String>,
    ) -> Result<Self> {
        let coin = coin.into();
        let own_address = own_address.into();
        let callback_url = callback_url.into();

        if callback_url.is_empty() {
            return Err(CryptApiError::Config("Callback URL is Missing".to_string()));
        }
        if coin.is_empty() {
            return Err(CryptApiError::Config("Coin is Missing".to_string()));
        }
        if own_address.is_empty() {
            return Err(CryptApiError::Config("Address is Missing".to_string()));
        }

        Ok(Self {
            coin: normalize_ticker(&coin),
            own_address,
            callback_url,
            parameters,
            extra_params,
            payment_address: None,
        })
    }

    /// Normalized coin ticker (slashes stored as underscores)
    pub fn coin(&self) -> &str {
        &self.coin
    }

    /// Payout address funds are forwarded to
    pub fn own_address(&self) -> &str {
        &self.own_address
    }

    /// Callback base URL before parameter merging
    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Payment address cached by the last successful address creation
    pub fn payment_address(&self) -> Option<&str> {
        self.payment_address.as_deref()
    }

    /// Callback URL with the session parameters merged and encoded
    pub fn callback(&self) -> String {
        prepare_callback_url(&self.callback_url, &self.parameters)
    }

    pub(crate) fn set_payment_address(&mut self, address: String) {
        self.payment_address = Some(address);
    }

    /// Query parameters for the `create` endpoint.
    ///
    /// Extra gateway parameters are appended after the fixed pairs so a
    /// caller-supplied duplicate key takes precedence at the gateway.
    pub(crate) fn create_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("address".to_string(), self.own_address.clone()),
            ("callback".to_string(), self.callback()),
        ];
        params.extend(
            self.extra_params
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        params
    }

    /// Query parameters for the `logs` endpoint
    pub(crate) fn logs_params(&self) -> Vec<(String, String)> {
        vec![("callback".to_string(), self.callback())]
    }

    /// Query parameters for the `qrcode` endpoint.
    ///
    /// The cached payment address is sent as-is (empty when no address has
    /// been created yet); `value` is included only when non-empty.
    pub(crate) fn qrcode_params(&self, value: Option<&str>, size: u32) -> Vec<(String, String)> {
        let address = self.payment_address.clone().unwrap_or_default();
        let mut params = vec![
            ("address".to_string(), address),
            ("size".to_string(), size.to_string()),
        ];
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            params.push(("value".to_string(), value.to_string()));
        }
        params
    }
}
