/*
[INPUT]:  HTTP client configuration and gateway endpoints
[OUTPUT]: HTTP responses and typed error results
[POS]:    HTTP layer - gateway communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod blocking;
pub mod client;
pub mod error;
pub mod payment;
pub mod public;

pub use blocking::BlockingCryptApiClient;
pub use client::{CRYPTAPI_HOST, CRYPTAPI_URL, ClientConfig, CryptApiClient};
pub use error::{CryptApiError, Result};
pub use public::{DEFAULT_ESTIMATE_ADDRESSES, DEFAULT_ESTIMATE_PRIORITY};
