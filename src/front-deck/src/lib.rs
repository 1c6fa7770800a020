use std::{cell::RefCell, rc::Rc};

use core_deck::{Controller, Effect, ModalId, Msg, flow::TOPIC_PROMPT, run_request};
use tracing::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, Window};

mod dom;
mod fetch;
mod logging;

use crate::{dom::Elements, fetch::FetchTransport};

/// Everything a listener needs. Shared by every closure on the page.
struct App {
    window: Window,
    elements: Elements,
    controller: RefCell<Controller>,
    transport: FetchTransport,
}

impl App {
    fn render(&self) {
        if let Err(e) = dom::render(&self.elements, self.controller.borrow().state()) {
            error!("Failed to render page: {:?}", e);
        }
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().expect("no global window exists");
    let document = window.document().expect("should have a document on window");

    let config =
        dom::read_config(&document).map_err(|e| JsValue::from_str(&format!("Invalid page configuration: {}", e)))?;
    logging::setup_logging(&config.log_filter);
    info!("WASM module initialized!");

    let elements = Elements::find(&document)?;
    let app = Rc::new(App {
        window,
        elements,
        controller: RefCell::new(Controller::new(config)),
        transport: FetchTransport,
    });

    app.render();
    wire_listeners(&app)?;

    Ok(())
}

fn wire_listeners(app: &Rc<App>) -> Result<(), JsValue> {
    listen(app, &app.elements.generate_card, "click", |app, event| {
        event.prevent_default();
        let default_topic = app.controller.borrow().config().default_topic.clone();
        let topic = match app.window.prompt_with_message_and_default(TOPIC_PROMPT, &default_topic) {
            Ok(topic) => topic,
            Err(e) => {
                error!("Topic prompt failed: {:?}", e);
                None
            }
        };
        dispatch(app, Msg::GenerateCardClicked { topic });
    })?;

    for modal in ModalId::ALL {
        let elements = app.elements.modal(modal);

        listen(app, &elements.card, "click", move |app, event| {
            event.prevent_default();
            dispatch(app, Msg::ModalCardClicked(modal));
        })?;

        listen(app, &elements.close, "click", move |app, _event| {
            dispatch(app, Msg::ModalCloseClicked(modal));
        })?;

        listen(app, &elements.backdrop, "click", move |app, event| {
            let on_backdrop = dom::is_target(&event, &app.elements.modal(modal).backdrop);
            dispatch(app, Msg::ModalClicked { modal, on_backdrop });
        })?;

        listen(app, &elements.form, "submit", move |app, event| {
            event.prevent_default();
            let value = dom::field_value(&app.elements.modal(modal).input);
            dispatch(app, Msg::FormSubmitted { modal, value });
        })?;
    }

    Ok(())
}

/// Registers `handler` for `event_type` on `target` for the lifetime of the page.
fn listen<F>(app: &Rc<App>, target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: Fn(&Rc<App>, Event) + 'static,
{
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| handler(&app, event)) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Feeds `msg` to the controller, re-renders, then carries out the resulting effects.
fn dispatch(app: &Rc<App>, msg: Msg) {
    let effects = app.controller.borrow_mut().update(msg);
    app.render();

    for effect in effects {
        match effect {
            Effect::Alert(message) => {
                if let Err(e) = app.window.alert_with_message(&message) {
                    error!("Alert failed: {:?}", e);
                }
            }
            Effect::SendRequest { token, url, payload } => {
                let app = app.clone();
                spawn_local(async move {
                    let msg = run_request(&app.transport, token, &url, &payload).await;
                    dispatch(&app, msg);
                });
            }
        }
    }
}
