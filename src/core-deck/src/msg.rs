use data_model_deck::RequestPayload;

use crate::{errors::ApiError, flow::ModalId, state::RequestToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User answered the topic prompt of the generate card. `None` when cancelled.
    GenerateCardClicked { topic: Option<String> },
    /// User clicked the paste or import card.
    ModalCardClicked(ModalId),
    /// User clicked a modal's close control.
    ModalCloseClicked(ModalId),
    /// User clicked somewhere on a modal. `on_backdrop` is true when the click target is the
    /// modal's backdrop rather than its content.
    ModalClicked { modal: ModalId, on_backdrop: bool },
    /// User submitted the form inside a modal.
    FormSubmitted { modal: ModalId, value: String },
    /// A request issued by [`Effect::SendRequest`] resolved.
    RequestFinished {
        token: RequestToken,
        outcome: Result<String, ApiError>,
    },
}

/// Side effects the host must perform on the controller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a blocking alert.
    Alert(String),
    /// POST `payload` as JSON to `url`, then report back with [`Msg::RequestFinished`].
    SendRequest {
        token: RequestToken,
        url: String,
        payload: RequestPayload,
    },
}
