//! Native HTTP transport backed by `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};

use crate::{
    api::{ApiTransport, RawResponse},
    errors::ApiError,
};

/// Posts requests with a `reqwest` client. URLs must be absolute, so configure an API root
/// when using it.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ApiTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ApiError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
