//! Binding between page elements and [`UiState`].

use core_deck::{ConfigError, ControllerConfig, ModalId, UiState, render::result_html};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlTextAreaElement};

/// Class that hides an element; toggled on modals and the loading indicator.
const HIDDEN_CLASS: &str = "hidden";

/// Elements belonging to one modal flow.
pub struct ModalElements {
    /// Card that opens the modal.
    pub card: Element,
    /// The modal itself. Clicks whose target is this element are backdrop clicks.
    pub backdrop: Element,
    pub close: Element,
    pub form: Element,
    pub input: Element,
}

/// Every element the controller reads from or renders into.
pub struct Elements {
    pub generate_card: Element,
    pub paste: ModalElements,
    pub import: ModalElements,
    pub loading: Element,
    pub loading_subtext: Element,
    pub result: Element,
}

impl Elements {
    /// Looks up every element by id. Fails on the first one missing from the page.
    pub fn find(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            generate_card: element(document, "generate-card")?,
            paste: ModalElements {
                card: element(document, "paste-card")?,
                backdrop: element(document, "paste-modal")?,
                close: element(document, "paste-modal-close")?,
                form: element(document, "paste-form")?,
                input: element(document, "paste-input")?,
            },
            import: ModalElements {
                card: element(document, "import-card")?,
                backdrop: element(document, "import-modal")?,
                close: element(document, "import-modal-close")?,
                form: element(document, "import-form")?,
                input: element(document, "import-input")?,
            },
            loading: element(document, "loading")?,
            loading_subtext: element(document, "loading-subtext")?,
            result: element(document, "result")?,
        })
    }

    pub fn modal(&self, modal: ModalId) -> &ModalElements {
        match modal {
            ModalId::Paste => &self.paste,
            ModalId::Import => &self.import,
        }
    }
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Page is missing element #{}", id)))
}

/// Reads the controller configuration from `data-*` attributes on `<body>`.
pub fn read_config(document: &Document) -> Result<ControllerConfig, ConfigError> {
    let body = document.body();
    ControllerConfig::from_lookup(|key| {
        body.as_ref()
            .and_then(|b| b.get_attribute(&format!("data-{}", key)))
    })
}

/// Makes the page match `state`.
pub fn render(elements: &Elements, state: &UiState) -> Result<(), JsValue> {
    for modal in ModalId::ALL {
        set_hidden(&elements.modal(modal).backdrop, !state.modal(modal).is_shown())?;
    }

    elements
        .loading_subtext
        .set_text_content(Some(&state.loading.subtext));
    set_hidden(&elements.loading, !state.loading.visible)?;

    elements.result.set_inner_html(&result_html(&state.result));
    Ok(())
}

fn set_hidden(element: &Element, hidden: bool) -> Result<(), JsValue> {
    element
        .class_list()
        .toggle_with_force(HIDDEN_CLASS, hidden)
        .map(|_| ())
}

/// True when `event` was dispatched on `element` itself rather than one of its children.
pub fn is_target(event: &Event, element: &Element) -> bool {
    event.target().is_some_and(|target| {
        let target: &JsValue = target.as_ref();
        let element: &JsValue = element.as_ref();
        target == element
    })
}

/// Current value of a text input or textarea.
pub fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        element.text_content().unwrap_or_default()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use core_deck::ResultView;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn create(document: &Document, tag: &str) -> Element {
        document.create_element(tag).unwrap()
    }

    fn modal_elements(document: &Document) -> ModalElements {
        ModalElements {
            card: create(document, "div"),
            backdrop: create(document, "div"),
            close: create(document, "span"),
            form: create(document, "form"),
            input: create(document, "input"),
        }
    }

    fn is_hidden(element: &Element) -> bool {
        element.class_list().contains(HIDDEN_CLASS)
    }

    #[wasm_bindgen_test]
    fn test_is_target_distinguishes_backdrop_from_content() {
        let document = document();
        let backdrop = create(&document, "div");
        let content = create(&document, "div");
        backdrop.append_child(&content).unwrap();

        let event = Event::new("click").unwrap();
        assert!(!is_target(&event, &backdrop));

        content.dispatch_event(&event).unwrap();
        assert!(!is_target(&event, &backdrop));
        assert!(is_target(&event, &content));

        let event = Event::new("click").unwrap();
        backdrop.dispatch_event(&event).unwrap();
        assert!(is_target(&event, &backdrop));
    }

    #[wasm_bindgen_test]
    fn test_field_value_reads_inputs_and_textareas() {
        let document = document();

        let input = create(&document, "input");
        input
            .dyn_ref::<HtmlInputElement>()
            .unwrap()
            .set_value("https://example.com");
        assert_eq!(field_value(&input), "https://example.com");

        let area = create(&document, "textarea");
        area.dyn_ref::<HtmlTextAreaElement>()
            .unwrap()
            .set_value("  some text \n");
        assert_eq!(field_value(&area), "  some text \n");
    }

    #[wasm_bindgen_test]
    fn test_render_toggles_hidden_and_fills_result() {
        let document = document();
        let elements = Elements {
            generate_card: create(&document, "div"),
            paste: modal_elements(&document),
            import: modal_elements(&document),
            loading: create(&document, "div"),
            loading_subtext: create(&document, "p"),
            result: create(&document, "div"),
        };

        let mut state = UiState::new();
        render(&elements, &state).unwrap();
        assert!(is_hidden(&elements.paste.backdrop));
        assert!(is_hidden(&elements.import.backdrop));
        assert!(is_hidden(&elements.loading));

        state.show_modal(ModalId::Paste);
        state.start_loading("Summarizing your text...");
        render(&elements, &state).unwrap();
        assert!(!is_hidden(&elements.paste.backdrop));
        assert!(is_hidden(&elements.import.backdrop));
        assert!(!is_hidden(&elements.loading));
        assert_eq!(
            elements.loading_subtext.text_content().as_deref(),
            Some("Summarizing your text...")
        );

        state.hide_modal(ModalId::Paste);
        state.finish_loading(ResultView::download("/files/x.pptx"));
        render(&elements, &state).unwrap();
        assert!(is_hidden(&elements.paste.backdrop));
        assert!(is_hidden(&elements.loading));
        assert_eq!(elements.result.child_element_count(), 1);
        let anchor = elements.result.first_element_child().unwrap();
        assert_eq!(anchor.get_attribute("href").as_deref(), Some("/files/x.pptx"));
    }
}
