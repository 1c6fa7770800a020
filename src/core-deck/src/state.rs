use crate::flow::ModalId;

/// Visible label of the download link.
pub const DOWNLOAD_LABEL: &str = "Download Your Presentation (.pptx)";
/// File name the browser suggests when saving the presentation.
pub const DOWNLOAD_FILENAME: &str = "ai_presentation.pptx";

/// Identifies one issued request. Tokens increase monotonically per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }
}

/// Loading indicator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Loading {
    pub visible: bool,
    pub subtext: String,
}

/// Content of the result area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Empty,
    /// A single download anchor.
    Download {
        href: String,
        label: String,
        filename: String,
    },
    /// Error text, rendered in the error style.
    Error { message: String },
}

impl ResultView {
    pub fn download(href: impl Into<String>) -> Self {
        Self::Download {
            href: href.into(),
            label: DOWNLOAD_LABEL.to_string(),
            filename: DOWNLOAD_FILENAME.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Everything the page shows. Rendering is a pure function of this value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub paste_modal: Visibility,
    pub import_modal: Visibility,
    pub loading: Loading,
    pub result: ResultView,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self, modal: ModalId) -> Visibility {
        match modal {
            ModalId::Paste => self.paste_modal,
            ModalId::Import => self.import_modal,
        }
    }

    fn modal_mut(&mut self, modal: ModalId) -> &mut Visibility {
        match modal {
            ModalId::Paste => &mut self.paste_modal,
            ModalId::Import => &mut self.import_modal,
        }
    }

    pub fn show_modal(&mut self, modal: ModalId) {
        *self.modal_mut(modal) = Visibility::Shown;
    }

    pub fn hide_modal(&mut self, modal: ModalId) {
        *self.modal_mut(modal) = Visibility::Hidden;
    }

    /// Reveals the loading indicator with `message` and clears the previous result.
    pub fn start_loading(&mut self, message: &str) {
        self.loading.subtext = message.to_string();
        self.loading.visible = true;
        self.result = ResultView::Empty;
    }

    /// Hides the loading indicator and shows `result`.
    pub fn finish_loading(&mut self, result: ResultView) {
        self.loading.visible = false;
        self.result = result;
    }
}
