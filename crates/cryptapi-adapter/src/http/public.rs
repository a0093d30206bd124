/*
[INPUT]:  Coin identifiers and fee-estimate arguments
[OUTPUT]: Coin metadata and fee estimates (no session required)
[POS]:    HTTP layer - session-free metadata endpoints
[UPDATE]: When adding new metadata endpoints or changing response handling
*/

use std::collections::HashMap;

use serde_json::Value;

use crate::coins::{normalize_ticker, supported_coins_from_info};
use crate::http::{CryptApiClient, Result};

/// Default number of addresses for fee estimation
pub const DEFAULT_ESTIMATE_ADDRESSES: u32 = 1;

/// Default priority for fee estimation
pub const DEFAULT_ESTIMATE_PRIORITY: &str = "default";

impl CryptApiClient {
    /// Fetch metadata for one coin, or for all coins when `coin` is empty
    ///
    /// GET /{coin}/info/
    pub async fn info(&self, coin: &str) -> Result<Value> {
        self.request(&normalize_ticker(coin), "info", &[]).await
    }

    /// Fetch the flat ticker -> display-name table of supported coins.
    ///
    /// Calls [`info`](Self::info) for all coins and flattens the nested
    /// coin/token structure.
    pub async fn supported_coins(&self) -> Result<HashMap<String, String>> {
        let info = self.info("").await?;
        Ok(supported_coins_from_info(&info))
    }

    /// Fetch a network fee estimate for a coin
    ///
    /// GET /{coin}/estimate/?addresses={addresses}&priority={priority}
    pub async fn estimate(&self, coin: &str, addresses: u32, priority: &str) -> Result<Value> {
        let params = vec![
            ("addresses".to_string(), addresses.to_string()),
            ("priority".to_string(), priority.to_string()),
        ];
        self.request(&normalize_ticker(coin), "estimate", &params)
            .await
    }
}
