//! Functional core of the presentation generator frontend.
//!
//! The page is modelled as a [`UiState`] owned by a [`Controller`]. User actions and request
//! outcomes arrive as [`Msg`]s; the controller updates the state and returns [`Effect`]s
//! (alerts, requests) for the host to carry out. Requests go through an [`ApiTransport`],
//! so the same logic runs against `fetch` in the browser, `reqwest` natively, or a mock.

pub mod api;
pub mod config;
pub mod controller;
pub mod errors;
pub mod flow;
pub mod msg;
pub mod render;
pub mod state;

#[cfg(not(target_arch = "wasm32"))]
pub mod http;

// Make the mock transport available for tests in this crate and dependent crates
#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;

pub use api::{ApiTransport, RawResponse, handle_api_call, run_request};
pub use config::{ControllerConfig, StalePolicy};
pub use controller::Controller;
pub use errors::{ApiError, ConfigError};
pub use flow::{Flow, FlowSpec, ModalId};
pub use msg::{Effect, Msg};
pub use state::{RequestToken, ResultView, UiState, Visibility};

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpTransport;
