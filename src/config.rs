use crate::render::RenderConfig;

/// Page-level settings for the modal and table.
///
/// Every field has a default, so a partial `toml` document only overrides
/// what it names.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    pub modal_id: String,
    pub title_id: String,
    pub body_id: String,
    pub close_id: String,
    /// Class toggled on the modal element while it is visible
    pub open_class: String,
    pub loading_title: String,
    pub content_title: String,
    pub error_title: String,
    pub table_class: String,
    /// Row count above which the table gets a "Showing all N rows" footer
    pub footer_threshold: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            modal_id: "data-modal".to_string(),
            title_id: "modal-title".to_string(),
            body_id: "modal-body-content".to_string(),
            close_id: "modal-close".to_string(),
            open_class: "open".to_string(),
            loading_title: "Loading data...".to_string(),
            content_title: "Data Detail View".to_string(),
            error_title: "Error loading data".to_string(),
            table_class: "swiss-table".to_string(),
            footer_threshold: 2000,
        }
    }
}

impl ViewConfig {
    /// Parse a `toml` string into `ViewConfig`.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Renderer settings derived from this config.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            table_class: self.table_class.clone(),
            footer_threshold: self.footer_threshold,
        }
    }
}
