pub mod api;
pub mod http;

pub use api::{collection_path, record_path, ApiEnvelope, ParametrizationsApi};
pub use http::HttpApiClient;
