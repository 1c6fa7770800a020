use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Endpoint enum
/// Backend route that turns user input into a downloadable presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Generate a presentation from a free-text topic.
    Generate,
    /// Summarize pasted text into a presentation.
    GenerateFromText,
    /// Scrape a web page and summarize it into a presentation.
    GenerateFromUrl,
}

impl Endpoint {
    /// Path of the route, relative to the API root.
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Generate => "/generate",
            Self::GenerateFromText => "/generate-from-text",
            Self::GenerateFromUrl => "/generate-from-url",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "POST {}", self.path())
    }
}

// API Payload Types

/// Body of a generation request.
///
/// Serializes to exactly one of `{"topic": ..}`, `{"text": ..}` or `{"url": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestPayload {
    Topic { topic: String },
    Text { text: String },
    Url { url: String },
}

impl RequestPayload {
    /// The route this payload is sent to.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Topic { .. } => Endpoint::Generate,
            Self::Text { .. } => Endpoint::GenerateFromText,
            Self::Url { .. } => Endpoint::GenerateFromUrl,
        }
    }

    /// The user-supplied value carried by this payload.
    pub fn value(&self) -> &str {
        match self {
            Self::Topic { topic } => topic,
            Self::Text { text } => text,
            Self::Url { url } => url,
        }
    }

    /// JSON request body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Response body shared by every generation route.
///
/// Success carries `download_url`, failure carries `error`. The body is decoded the same
/// way regardless of the HTTP status, so both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn success(download_url: impl Into<String>) -> Self {
        Self {
            download_url: Some(download_url.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            download_url: None,
            error: Some(error.into()),
        }
    }

    /// Decodes a response body. Any JSON object is accepted; unknown fields are ignored.
    ///
    /// Fields of an unexpected type never fail decoding: a non-string `download_url` is
    /// absent, and a falsy `error` is absent while other non-strings become JSON text.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_str(body)?;
        Ok(Self {
            download_url: fields
                .get("download_url")
                .and_then(Value::as_str)
                .map(str::to_string),
            error: fields.get("error").and_then(error_text),
        })
    }

    /// JSON response body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The server's error message, if it sent a non-empty one.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// The download link, if it sent a non-empty one.
    pub fn download_link(&self) -> Option<&str> {
        self.download_url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Message carried by an `error` field. Falsy values (`null`, `false`, `0`, `""`) are
/// absent; other non-string values are shown as JSON text.
fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
