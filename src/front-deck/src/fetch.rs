use async_trait::async_trait;
use core_deck::{ApiError, ApiTransport, RawResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Sends requests with the browser's `fetch`.
#[derive(Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl ApiTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ApiError> {
        post(url, &body)
            .await
            .map_err(|e| ApiError::Transport(js_error_message(&e)))
    }
}

async fn post(url: &str, body: &str) -> Result<RawResponse, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;

    let opts = &mut RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    // Read as text: the body is decoded as JSON whatever the status.
    let text = JsFuture::from(resp.text()?).await?;

    Ok(RawResponse {
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

/// Best human-readable message of a thrown JS value.
fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
