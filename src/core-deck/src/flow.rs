//! The three ways a user can start a presentation, as data.
//!
//! Each [`Flow`] maps to one [`FlowSpec`]: how its input is validated, which endpoint it
//! posts to, what the loading indicator says, and which modal (if any) collects the input.
//! The controller has a single dispatcher that interprets this table.

use data_model_deck::{Endpoint, RequestPayload};

/// Message of the topic prompt.
pub const TOPIC_PROMPT: &str = "Please enter your presentation topic:";

/// Overlay dialog that collects input for a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    Paste,
    Import,
}

impl ModalId {
    pub const ALL: [ModalId; 2] = [ModalId::Paste, ModalId::Import];

    /// The flow whose form lives in this modal.
    pub fn flow(self) -> Flow {
        match self {
            Self::Paste => Flow::Text,
            Self::Import => Flow::Url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Generate card: topic typed into a prompt.
    Topic,
    /// Paste card: text entered in the paste modal.
    Text,
    /// Import card: URL entered in the import modal.
    Url,
}

/// How a flow is validated and dispatched.
#[derive(Debug)]
pub struct FlowSpec {
    pub endpoint: Endpoint,
    pub loading_message: &'static str,
    /// Accepts or rejects the raw input.
    pub is_valid: fn(&str) -> bool,
    /// Blocking alert shown on rejected input. `None` rejects silently.
    pub empty_input_alert: Option<&'static str>,
    pub modal: Option<ModalId>,
}

/// Why input never became a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Prompt cancelled or left empty: nothing happens.
    Silent,
    /// Empty form field: the user is told with a blocking alert.
    Alert(&'static str),
}

fn non_empty(value: &str) -> bool {
    !value.is_empty()
}

static TOPIC: FlowSpec = FlowSpec {
    endpoint: Endpoint::Generate,
    loading_message: "Generating from topic...",
    is_valid: non_empty,
    empty_input_alert: None,
    modal: None,
};

static TEXT: FlowSpec = FlowSpec {
    endpoint: Endpoint::GenerateFromText,
    loading_message: "Summarizing your text...",
    is_valid: non_empty,
    empty_input_alert: Some("Please paste some text first."),
    modal: Some(ModalId::Paste),
};

static URL: FlowSpec = FlowSpec {
    endpoint: Endpoint::GenerateFromUrl,
    loading_message: "Scraping and summarizing URL...",
    is_valid: non_empty,
    empty_input_alert: Some("Please enter a URL first."),
    modal: Some(ModalId::Import),
};

impl Flow {
    pub const ALL: [Flow; 3] = [Flow::Topic, Flow::Text, Flow::Url];

    pub fn spec(self) -> &'static FlowSpec {
        match self {
            Self::Topic => &TOPIC,
            Self::Text => &TEXT,
            Self::Url => &URL,
        }
    }

    /// Wraps `value` in the payload shape this flow's endpoint expects.
    pub fn payload(self, value: String) -> RequestPayload {
        match self {
            Self::Topic => RequestPayload::Topic { topic: value },
            Self::Text => RequestPayload::Text { text: value },
            Self::Url => RequestPayload::Url { url: value },
        }
    }

    /// Turns raw input into a payload. `None` is a cancelled prompt.
    pub fn validate(self, value: Option<String>) -> Result<RequestPayload, Rejection> {
        let spec = self.spec();
        match value {
            Some(value) if (spec.is_valid)(&value) => Ok(self.payload(value)),
            _ => Err(spec.empty_input_alert.map_or(Rejection::Silent, Rejection::Alert)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_flow_targets_its_own_endpoint() {
        for flow in Flow::ALL {
            let payload = flow.payload("value".to_string());
            assert_eq!(payload.endpoint(), flow.spec().endpoint);
        }
    }

    #[test]
    fn test_modal_flows_round_trip() {
        for modal in ModalId::ALL {
            assert_eq!(modal.flow().spec().modal, Some(modal));
        }
        assert_eq!(Flow::Topic.spec().modal, None);
    }

    #[test]
    fn test_topic_rejects_silently() {
        assert_eq!(Flow::Topic.validate(None), Err(Rejection::Silent));
        assert_eq!(Flow::Topic.validate(Some(String::new())), Err(Rejection::Silent));
    }

    #[test]
    fn test_form_flows_reject_with_alert() {
        assert_eq!(
            Flow::Text.validate(Some(String::new())),
            Err(Rejection::Alert("Please paste some text first."))
        );
        assert_eq!(
            Flow::Url.validate(Some(String::new())),
            Err(Rejection::Alert("Please enter a URL first."))
        );
    }

    #[test]
    fn test_whitespace_is_passed_through() {
        assert_eq!(
            Flow::Topic.validate(Some("  ".to_string())),
            Ok(RequestPayload::Topic {
                topic: "  ".to_string()
            })
        );
    }

    #[test]
    fn test_valid_input_builds_payload() {
        assert_eq!(
            Flow::Url.validate(Some("https://example.com".to_string())),
            Ok(RequestPayload::Url {
                url: "https://example.com".to_string()
            })
        );
    }
}
