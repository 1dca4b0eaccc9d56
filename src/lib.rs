//! # csv-modal-view
//!
//! Fetch a comma-separated data file, parse it, and show it as an HTML
//! table inside a page modal.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Parsing simple quoted CSV into headers and keyed rows
//! - Caching parsed tables per source path for the page session
//! - Rendering tables to HTML with link-ified URL cells
//! - Driving the modal through its loading, content and error states
//! - Reading trigger and counter settings from `data-*` attributes
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load [`ViewConfig`] from TOML
//! - `web` - Enable web/WASM DOM bindings
//! - `http` - Native [`TableSource`] over `reqwest`
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::cell::RefCell;
//! use csv_modal_view::{activate_trigger, ModalController, TableFetcher, TriggerConfig, ViewConfig};
//!
//! let fetcher = TableFetcher::new(source);
//! let modal = RefCell::new(ModalController::new());
//! let trigger = TriggerConfig::from_attributes(|name| element.get_attribute(name))?;
//!
//! activate_trigger(&fetcher, &modal, &trigger, &ViewConfig::default(), |m| view.sync(m)).await;
//! ```

pub mod attributes;
mod cache;
mod config;
mod data;
mod error;
#[cfg(feature = "http")]
mod http;
pub mod loader;
pub mod modal;
mod parser;
pub mod render;
pub mod trigger;

pub use attributes::{AttributeError, CounterConfig, FilterSpec, TriggerConfig};
pub use cache::TableCache;
pub use config::ViewConfig;
pub use data::{ParsedTable, RowRecord};
pub use error::{LoadError, LoadResult};
pub use loader::{TableFetcher, TableSource};
pub use modal::{ModalBody, ModalController, ModalState};
pub use parser::{parse_table, split_quoted, ParseError};
pub use render::{render_table, RenderConfig};
pub use trigger::{activate_trigger, TriggerOutcome};

#[cfg(feature = "http")]
pub use http::HttpSource;

#[cfg(feature = "web")]
pub use trigger::web::bind_page;
