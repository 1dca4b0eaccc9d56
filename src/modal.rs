//! Modal controller for the data view.

use crate::render::escape_html;

/// Key that dismisses an open modal.
pub const ESCAPE_KEY: &str = "Escape";

/// Markup shown while a table is loading.
const LOADING_HTML: &str = "<div class=\"spinner\">Loading...</div>";

/// Body content of the modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalBody {
    /// Nothing shown yet
    #[default]
    Empty,
    /// Loading placeholder
    Loading,
    /// Rendered table markup
    Content(String),
    /// Load failure for the named source
    Error { source: String },
}

/// Current state of the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    /// Hidden
    Closed,
    /// Visible with the loading placeholder
    Loading,
    /// Visible with a rendered table
    Content,
    /// Visible with an error message
    Error,
}

/// Platform-agnostic controller for a single modal surface.
///
/// Tracks visibility, title and body. Visibility is only set by
/// [`open_loading`](Self::open_loading) and cleared by
/// [`close`](Self::close); results arriving after the user closed the modal
/// update the body without reopening it.
///
/// ## Example
///
/// ```rust
/// use csv_modal_view::{ModalController, ModalState};
///
/// let mut modal = ModalController::new();
/// modal.open_loading("Loading data...");
/// assert_eq!(modal.state(), ModalState::Loading);
///
/// modal.show_content("Data Detail View", "<table></table>");
/// assert_eq!(modal.state(), ModalState::Content);
///
/// assert!(modal.handle_key("Escape"));
/// assert_eq!(modal.state(), ModalState::Closed);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ModalController {
    visible: bool,
    title: String,
    body: ModalBody,
}

impl ModalController {
    /// Create a closed, empty modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the modal with `title` and a loading placeholder.
    pub fn open_loading(&mut self, title: &str) {
        self.title = title.to_string();
        self.body = ModalBody::Loading;
        self.visible = true;
    }

    /// Replace the body with rendered markup.
    pub fn show_content(&mut self, title: &str, markup: impl Into<String>) {
        self.title = title.to_string();
        self.body = ModalBody::Content(markup.into());
    }

    /// Replace the body with an error naming the failed source.
    pub fn show_error(&mut self, title: &str, source: &str) {
        self.title = title.to_string();
        self.body = ModalBody::Error {
            source: source.to_string(),
        };
    }

    /// Hide the modal.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Handle a key press. Escape closes an open modal.
    ///
    /// Returns `true` when the modal was closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && self.visible {
            self.close();
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Get the current state.
    pub fn state(&self) -> ModalState {
        if !self.visible {
            return ModalState::Closed;
        }
        match self.body {
            ModalBody::Empty | ModalBody::Loading => ModalState::Loading,
            ModalBody::Content(_) => ModalState::Content,
            ModalBody::Error { .. } => ModalState::Error,
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn body(&self) -> &ModalBody {
        &self.body
    }

    /// Markup for the modal body element.
    pub fn body_html(&self) -> String {
        match &self.body {
            ModalBody::Empty => String::new(),
            ModalBody::Loading => LOADING_HTML.to_string(),
            ModalBody::Content(markup) => markup.clone(),
            ModalBody::Error { source } => format!(
                "<p class=\"modal-error\">Failed to load {}</p>",
                escape_html(source)
            ),
        }
    }
}

/// Web-specific modal presentation.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use crate::config::ViewConfig;
    use wasm_bindgen::JsValue;
    use web_sys::{Document, Element};

    /// DOM elements making up the modal.
    #[derive(Clone, Debug)]
    pub struct ModalView {
        modal: Element,
        title: Element,
        body: Element,
        open_class: String,
    }

    impl ModalView {
        /// Look up the modal elements by the ids in `config`.
        pub fn find(document: &Document, config: &ViewConfig) -> Result<Self, String> {
            let by_id = |id: &str| {
                document
                    .get_element_by_id(id)
                    .ok_or_else(|| format!("No element with id `{}`", id))
            };
            Ok(Self {
                modal: by_id(&config.modal_id)?,
                title: by_id(&config.title_id)?,
                body: by_id(&config.body_id)?,
                open_class: config.open_class.clone(),
            })
        }

        /// Mirror the controller state into the DOM.
        pub fn sync(&self, controller: &ModalController) -> Result<(), JsValue> {
            self.title.set_text_content(Some(controller.title()));
            self.body.set_inner_html(&controller.body_html());
            let classes = self.modal.class_list();
            if controller.is_open() {
                classes.add_1(&self.open_class)
            } else {
                classes.remove_1(&self.open_class)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_closed() {
        let modal = ModalController::new();
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(!modal.is_open());
        assert_eq!(modal.body_html(), "");
    }

    #[test]
    fn test_loading_then_content() {
        let mut modal = ModalController::new();
        modal.open_loading("Loading data...");

        assert_eq!(modal.state(), ModalState::Loading);
        assert_eq!(modal.title(), "Loading data...");
        assert!(modal.body_html().contains("Loading..."));

        modal.show_content("Data Detail View", "<table></table>");
        assert_eq!(modal.state(), ModalState::Content);
        assert_eq!(modal.title(), "Data Detail View");
        assert_eq!(modal.body_html(), "<table></table>");
    }

    #[test]
    fn test_loading_then_error() {
        let mut modal = ModalController::new();
        modal.open_loading("Loading data...");
        modal.show_error("Error loading data", "csv/missing.csv");

        assert_eq!(modal.state(), ModalState::Error);
        assert_eq!(modal.title(), "Error loading data");
        assert!(modal.body_html().contains("Failed to load csv/missing.csv"));
    }

    #[test]
    fn test_content_keeps_closed_modal_closed() {
        let mut modal = ModalController::new();
        modal.open_loading("Loading data...");
        modal.close();
        modal.show_content("Data Detail View", "<table></table>");

        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(modal.body(), &ModalBody::Content("<table></table>".into()));
    }

    #[test]
    fn test_escape_closes_open_modal() {
        let mut modal = ModalController::new();
        modal.open_loading("Loading data...");

        assert!(!modal.handle_key("Enter"));
        assert!(modal.is_open());

        assert!(modal.handle_key(ESCAPE_KEY));
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_escape_when_closed_is_noop() {
        let mut modal = ModalController::new();
        assert!(!modal.handle_key(ESCAPE_KEY));
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_error_source_escaped() {
        let mut modal = ModalController::new();
        modal.open_loading("Loading data...");
        modal.show_error("Error loading data", "<x>.csv");
        assert!(modal.body_html().contains("&lt;x&gt;.csv"));
    }
}
