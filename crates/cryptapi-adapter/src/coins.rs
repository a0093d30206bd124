/*
[INPUT]:  Coin tickers and raw responses from the info endpoint
[OUTPUT]: Normalized ticker path segments and flat ticker -> name tables
[POS]:    Coin layer - ticker normalization and metadata flattening
[UPDATE]: When the gateway's info response shape or ticker scheme changes
*/

use std::collections::HashMap;

use serde_json::Value;

/// Normalize a coin ticker for internal storage.
///
/// Multi-segment identifiers such as `bep20/usdt` are stored with `_` so the
/// ticker is a single opaque token; [`ticker_path`] re-expands it when the
/// gateway URL path is built.
pub fn normalize_ticker(coin: &str) -> String {
    coin.replace('/', "_")
}

/// Expand a normalized ticker into its gateway URL path segment.
///
/// An empty ticker yields an empty segment (endpoint is not coin-scoped);
/// otherwise `_` is expanded back to `/` and a trailing slash appended, e.g.
/// `bep20_usdt` becomes `bep20/usdt/`.
pub fn ticker_path(coin: &str) -> String {
    if coin.is_empty() {
        String::new()
    } else {
        format!("{}/", coin.replace('_', "/"))
    }
}

/// Flatten an info response into a ticker -> display-name table.
///
/// Top-level entries carrying a `coin` field map their ticker to that name.
/// The nested `tokens` object (chain -> token ticker -> token info) maps each
/// token as `chain/token`. Entries matching neither shape are skipped; this
/// never fails on malformed input.
pub fn supported_coins_from_info(info: &Value) -> HashMap<String, String> {
    let mut result = HashMap::new();

    let Some(entries) = info.as_object() else {
        return result;
    };

    for (ticker, coin_info) in entries {
        if let Some(name) = coin_info.get("coin").and_then(Value::as_str) {
            result.insert(ticker.clone(), name.to_string());
        }
    }

    if let Some(chains) = entries.get("tokens").and_then(Value::as_object) {
        for (chain, tokens) in chains {
            let Some(tokens) = tokens.as_object() else {
                continue;
            };
            for (token_ticker, token_info) in tokens {
                let name = token_info
                    .get("coin")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                result.insert(format!("{chain}/{token_ticker}"), name.to_string());
            }
        }
    }

    result
}
