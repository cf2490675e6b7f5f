//! [`ApiService`](toolcall_application::ports::api_service::ApiService) adapters
//!
//! - [`HttpApiService`]: live weather, geocoding and search providers over HTTP
//! - [`MockApiService`]: deterministic canned answers for `--mock` and tests

mod http;
mod mock;

pub use http::{ApiEndpoints, HttpApiService};
pub use mock::MockApiService;
