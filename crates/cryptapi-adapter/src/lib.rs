/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public CryptAPI adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod callback;
pub mod coins;
pub mod http;
pub mod session;

// Re-export the codec and normalizer helpers
pub use callback::prepare_callback_url;
pub use coins::{normalize_ticker, supported_coins_from_info, ticker_path};

// Re-export commonly used types from http
pub use http::{
    BlockingCryptApiClient,
    ClientConfig,
    CryptApiClient,
    CryptApiError,
    Result,
};

// Re-export the payment session
pub use session::PaymentSession;
