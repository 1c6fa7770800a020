//! The UI controller: applies user and network messages to [`UiState`] and returns the
//! effects the host has to perform.

use tracing::{debug, info, warn};

use crate::{
    config::{ControllerConfig, StalePolicy},
    errors::ApiError,
    flow::{Flow, Rejection},
    msg::{Effect, Msg},
    state::{RequestToken, ResultView, UiState},
};

#[derive(Debug)]
pub struct Controller {
    config: ControllerConfig,
    state: UiState,
    next_token: RequestToken,
    latest: Option<RequestToken>,
}

impl Controller {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            state: UiState::new(),
            next_token: RequestToken::first(),
            latest: None,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The most recently issued request, if any was issued.
    pub fn latest_request(&self) -> Option<RequestToken> {
        self.latest
    }

    /// Applies a message to the state and returns any effects.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::GenerateCardClicked { topic } => self.submit(Flow::Topic, topic),
            Msg::ModalCardClicked(modal) => {
                self.state.show_modal(modal);
                Vec::new()
            }
            Msg::ModalCloseClicked(modal) => {
                self.state.hide_modal(modal);
                Vec::new()
            }
            Msg::ModalClicked { modal, on_backdrop } => {
                if on_backdrop {
                    self.state.hide_modal(modal);
                }
                Vec::new()
            }
            Msg::FormSubmitted { modal, value } => self.submit(modal.flow(), Some(value)),
            Msg::RequestFinished { token, outcome } => {
                self.finish(token, outcome);
                Vec::new()
            }
        }
    }

    /// Single dispatcher for every flow: validate, close the flow's modal, start loading and
    /// issue the request.
    fn submit(&mut self, flow: Flow, value: Option<String>) -> Vec<Effect> {
        let payload = match flow.validate(value) {
            Ok(payload) => payload,
            Err(Rejection::Silent) => {
                debug!("Ignoring empty input for {:?}", flow);
                return Vec::new();
            }
            Err(Rejection::Alert(message)) => {
                debug!("Rejected empty input for {:?}", flow);
                return vec![Effect::Alert(message.to_string())];
            }
        };

        let spec = flow.spec();
        if let Some(modal) = spec.modal {
            self.state.hide_modal(modal);
        }
        self.state.start_loading(spec.loading_message);

        let token = self.next_token;
        self.next_token = token.next();
        self.latest = Some(token);

        let url = self.config.endpoint_url(spec.endpoint);
        info!("Issuing request {} to {}", token, url);
        debug!("Request {} carries {} bytes of input", token, payload.value().len());
        vec![Effect::SendRequest { token, url, payload }]
    }

    fn finish(&mut self, token: RequestToken, outcome: Result<String, ApiError>) {
        if self.config.stale_responses == StalePolicy::Discard && self.latest != Some(token) {
            debug!("Discarding outcome of superseded request {}", token);
            return;
        }

        let result = match outcome {
            Ok(href) => {
                info!("Request {} produced a presentation", token);
                ResultView::download(self.config.resolve_download_url(&href))
            }
            Err(e) => {
                warn!("Request {} failed: {}", token, e);
                ResultView::error(e.to_string())
            }
        };
        self.state.finish_loading(result);
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}
