/*
[INPUT]:  Callback base URL and caller-defined parameter map
[OUTPUT]: Percent-encoded callback URL carrying the parameters
[POS]:    Codec layer - callback URL construction
[UPDATE]: When the gateway's callback encoding contract changes
*/

use std::collections::HashMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Escape set for the composed callback URL.
///
/// Everything outside the RFC 3986 unreserved characters is encoded, except
/// `:/?=&` which must stay literal so the URL structure survives the
/// gateway's notification round-trip.
const CALLBACK_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'=')
    .remove(b'&')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Build the callback URL the gateway will invoke on payment notification.
///
/// An empty parameter map returns `base_url` unchanged. Otherwise parameters
/// are appended as `key=value` pairs (after `&` if `base_url` already has a
/// query string, `?` otherwise) and the whole composed string is
/// percent-encoded with [`CALLBACK_ESCAPE`].
///
/// Pair ordering follows map iteration order and is not guaranteed stable.
/// Individual keys and values are not escaped before the final pass, so a
/// value containing `&` or `=` corrupts the parameter boundaries. This
/// mirrors the gateway's expected encoding and is a caller constraint, not a
/// bug to fix here.
pub fn prepare_callback_url(base_url: &str, params: &HashMap<String, String>) -> String {
    if params.is_empty() {
        return base_url.to_string();
    }

    let separator = if base_url.contains('?') { '&' } else { '?' };
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    utf8_percent_encode(&format!("{base_url}{separator}{query}"), CALLBACK_ESCAPE).to_string()
}
