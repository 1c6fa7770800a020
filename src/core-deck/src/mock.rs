//! Mock transport for testing
//!
//! This module provides a mock implementation of the `ApiTransport` trait
//! that can be configured to return predefined responses or errors,
//! without making real HTTP calls. Every request is recorded.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use data_model_deck::ApiResponse;

use crate::{
    api::{ApiTransport, RawResponse},
    errors::ApiError,
};

/// A request seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: String,
}

#[derive(Debug, Clone)]
enum Reply {
    Respond(RawResponse),
    Fail(String),
}

/// Mock transport for testing
///
/// Can be configured to:
/// - Return specific responses based on the request URL
/// - Return a default response for any URL
/// - Simulate network failures
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Map of URL suffixes to replies
    replies: HashMap<String, Reply>,
    /// Reply used when no URL matches
    default_reply: Option<Reply>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Create a new empty mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers every request with `status` and `body`
    pub fn with_default(status: u16, body: &str) -> Self {
        Self {
            default_reply: Some(Reply::Respond(RawResponse::new(status, body))),
            ..Self::default()
        }
    }

    /// Create a mock that answers every request with a download link
    pub fn with_success(download_url: &str) -> Self {
        Self::with_default(200, &to_json(&ApiResponse::success(download_url)))
    }

    /// Create a mock that answers every request with an error status and message
    pub fn with_error(status: u16, message: &str) -> Self {
        Self::with_default(status, &to_json(&ApiResponse::failure(message)))
    }

    /// Create a mock whose requests never reach a server
    pub fn with_failure(message: &str) -> Self {
        Self {
            default_reply: Some(Reply::Fail(message.to_string())),
            ..Self::default()
        }
    }

    /// Answer requests whose URL ends with `url_suffix` with `status` and `body`
    pub fn add_response(&mut self, url_suffix: &str, status: u16, body: &str) {
        self.replies
            .insert(url_suffix.to_string(), Reply::Respond(RawResponse::new(status, body)));
    }

    /// Fail requests whose URL ends with `url_suffix`
    pub fn add_failure(&mut self, url_suffix: &str, message: &str) {
        self.replies
            .insert(url_suffix.to_string(), Reply::Fail(message.to_string()));
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn reply_for(&self, url: &str) -> Option<&Reply> {
        self.replies
            .iter()
            .filter(|(suffix, _)| url.ends_with(suffix.as_str()))
            .max_by_key(|(suffix, _)| suffix.len())
            .map(|(_, reply)| reply)
            .or(self.default_reply.as_ref())
    }
}

fn to_json(response: &ApiResponse) -> String {
    response.to_json().unwrap_or_else(|_| "{}".to_string())
}

#[async_trait(?Send)]
impl ApiTransport for MockTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ApiError> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            body,
        });

        match self.reply_for(url) {
            Some(Reply::Respond(response)) => Ok(response.clone()),
            Some(Reply::Fail(message)) => Err(ApiError::Transport(message.clone())),
            None => Err(ApiError::Transport(format!("No mock reply configured for {}", url))),
        }
    }
}
