/*
[INPUT]:  Payment session state and per-call arguments
[OUTPUT]: Gateway responses for session-bound endpoints
[POS]:    HTTP layer - session-bound endpoints (create, logs, qrcode, convert)
[UPDATE]: When session-bound endpoints or their parameters change
*/

use serde_json::Value;

use crate::http::{CryptApiClient, Result};
use crate::session::PaymentSession;

impl CryptApiClient {
    /// Request a fresh payment address for the session's coin.
    ///
    /// GET /{coin}/create/?address={own}&callback={callback}
    ///
    /// On success the response's `address_in` is cached on the session for
    /// subsequent [`qrcode`](Self::qrcode) calls; the full response object is
    /// returned.
    pub async fn create_address(&self, session: &mut PaymentSession) -> Result<Value> {
        let params = session.create_params();
        let response = self.request(session.coin(), "create", &params).await?;

        if let Some(address) = response.get("address_in").and_then(Value::as_str) {
            session.set_payment_address(address.to_string());
        }

        Ok(response)
    }

    /// Fetch notification logs for the session's callback URL
    ///
    /// GET /{coin}/logs/?callback={callback}
    pub async fn logs(&self, session: &PaymentSession) -> Result<Value> {
        let params = session.logs_params();
        self.request(session.coin(), "logs", &params).await
    }

    /// Request a QR code for the session's cached payment address.
    ///
    /// GET /{coin}/qrcode/?address={payment_address}&size={size}
    ///
    /// `value` is included only when non-empty. Reads the address cached by
    /// the last successful [`create_address`](Self::create_address).
    pub async fn qrcode(
        &self,
        session: &PaymentSession,
        value: Option<&str>,
        size: u32,
    ) -> Result<Value> {
        let params = session.qrcode_params(value, size);
        self.request(session.coin(), "qrcode", &params).await
    }

    /// Convert a value from another currency into the session's coin
    ///
    /// GET /{coin}/convert/?from={from_coin}&value={value}
    pub async fn conversion(
        &self,
        session: &PaymentSession,
        from_coin: &str,
        value: f64,
    ) -> Result<Value> {
        let params = vec![
            ("from".to_string(), from_coin.to_string()),
            ("value".to_string(), value.to_string()),
        ];
        self.request(session.coin(), "convert", &params).await
    }
}
