pub mod models;

pub use models::{ApiResponse, Endpoint, RequestPayload};
