//! The request routine shared by every flow.

use async_trait::async_trait;
use data_model_deck::{ApiResponse, RequestPayload};
use tracing::{debug, error};

use crate::{errors::ApiError, msg::Msg, state::RequestToken};

/// Status and body of an HTTP response, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can POST a JSON body and hand back the raw reply.
///
/// Futures are not required to be `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait ApiTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ApiError>;
}

/// Posts `payload` to `url` and interprets the reply. Returns the download link.
///
/// The body is decoded as JSON regardless of status. A non-2xx status fails with the
/// server's `error` message, or the generic fallback when it sent none.
pub async fn handle_api_call<T>(transport: &T, url: &str, payload: &RequestPayload) -> Result<String, ApiError>
where
    T: ApiTransport + ?Sized,
{
    let body = payload.to_json().map_err(|e| ApiError::Encode(e.to_string()))?;

    debug!("POST {} ({} bytes)", url, body.len());
    let response = transport.post_json(url, body).await?;
    debug!("POST {} answered {}", url, response.status);

    let data = ApiResponse::from_json(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;

    if !response.is_success() {
        return Err(ApiError::status(response.status, data.error_message()));
    }

    data.download_link().map(str::to_string).ok_or(ApiError::MissingDownloadUrl)
}

/// Runs a request to completion and produces the message that reports its outcome.
pub async fn run_request<T>(transport: &T, token: RequestToken, url: &str, payload: &RequestPayload) -> Msg
where
    T: ApiTransport + ?Sized,
{
    let outcome = handle_api_call(transport, url, payload).await;
    if let Err(e) = &outcome {
        error!("Error: {} (request {}, {})", e, token, payload.endpoint());
    }
    Msg::RequestFinished { token, outcome }
}
