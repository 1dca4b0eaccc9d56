//! Trigger activation: open the modal, load the table, show the result.

use crate::attributes::TriggerConfig;
use crate::config::ViewConfig;
use crate::error::LoadError;
use crate::loader::{TableFetcher, TableSource};
use crate::modal::ModalController;
use crate::render::render_table;
use std::cell::RefCell;

/// How a trigger activation settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The table was rendered into the modal
    Shown { rows: usize },
    /// Loading failed and the modal shows an error
    Failed(LoadError),
}

/// Run one trigger activation to completion.
///
/// Opens the modal in its loading state, fetches the table through the
/// shared fetcher and replaces the loading placeholder with either the
/// rendered table or an error naming the source. Errors are logged and
/// never propagated. `on_change` is called after the modal opens and again
/// once it settles, so callers can mirror the state into a view.
///
/// The modal is only borrowed between suspension points, so several
/// activations can run at once on the same event loop.
pub async fn activate_trigger<S, F>(
    fetcher: &TableFetcher<S>,
    modal: &RefCell<ModalController>,
    trigger: &TriggerConfig,
    config: &ViewConfig,
    on_change: F,
) -> TriggerOutcome
where
    S: TableSource,
    F: Fn(&ModalController),
{
    {
        let mut modal = modal.borrow_mut();
        modal.open_loading(&config.loading_title);
        on_change(&*modal);
    }

    let outcome = match fetcher.fetch_table(&trigger.source).await {
        Ok(table) => {
            let markup = render_table(&table, trigger.filter.as_ref(), &config.render_config());
            modal
                .borrow_mut()
                .show_content(&config.content_title, markup);
            TriggerOutcome::Shown {
                rows: table.row_count(),
            }
        }
        Err(err) => {
            tracing::error!(source = %trigger.source, error = %err, "failed to load table");
            modal
                .borrow_mut()
                .show_error(&config.error_title, &trigger.source);
            TriggerOutcome::Failed(err)
        }
    };

    on_change(&*modal.borrow());
    outcome
}

/// Browser bindings for trigger elements and the modal.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use crate::attributes::ATTR_CSV_SOURCE;
    use crate::loader::web::FetchSource;
    use crate::modal::web::ModalView;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{console, Document, Element, Event, KeyboardEvent};

    /// State shared by every listener on the page.
    struct Page {
        fetcher: TableFetcher<FetchSource>,
        modal: RefCell<ModalController>,
        view: ModalView,
        config: ViewConfig,
    }

    impl Page {
        fn sync(&self, modal: &ModalController) {
            if let Err(err) = self.view.sync(modal) {
                console::error_1(&err);
            }
        }

        fn close(&self) {
            self.modal.borrow_mut().close();
            self.sync(&self.modal.borrow());
        }

        async fn activate(&self, element: &Element) {
            let trigger = match TriggerConfig::from_attributes(|name| element.get_attribute(name)) {
                Ok(trigger) => trigger,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping trigger");
                    return;
                }
            };

            let outcome =
                activate_trigger(&self.fetcher, &self.modal, &trigger, &self.config, |m| {
                    self.sync(m)
                })
                .await;

            if let TriggerOutcome::Failed(err) = outcome {
                console::error_1(&JsValue::from_str(&format!(
                    "Failed to load {}: {}",
                    trigger.source, err
                )));
            }
        }
    }

    /// Attach the data modal behaviour to `document`.
    ///
    /// Every element carrying `data-csv-source` opens the modal on click.
    /// The close control and the Escape key are wired when the close
    /// element exists. Returns the number of triggers bound.
    pub fn bind_page(document: &Document, config: ViewConfig) -> Result<u32, JsValue> {
        let view = ModalView::find(document, &config).map_err(|e| JsValue::from_str(&e))?;
        let source = FetchSource::new().ok_or_else(|| JsValue::from_str("No window available"))?;
        let page = Rc::new(Page {
            fetcher: TableFetcher::new(source),
            modal: RefCell::new(ModalController::new()),
            view,
            config,
        });

        let triggers = document.query_selector_all(&format!("[{}]", ATTR_CSV_SOURCE))?;
        let mut bound = 0;
        for i in 0..triggers.length() {
            let Some(element) = triggers.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };

            let page = Rc::clone(&page);
            let target = element.clone();
            let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                let page = Rc::clone(&page);
                let target = target.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    page.activate(&target).await;
                });
            });
            element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
            bound += 1;
        }

        if let Some(close) = document.get_element_by_id(&page.config.close_id) {
            let close_page = Rc::clone(&page);
            let on_close = Closure::<dyn FnMut(Event)>::new(move |_: Event| close_page.close());
            close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
            on_close.forget();

            let key_page = Rc::clone(&page);
            let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                let closed = key_page.modal.borrow_mut().handle_key(&event.key());
                if closed {
                    key_page.sync(&key_page.modal.borrow());
                }
            });
            document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
            on_key.forget();
        }

        tracing::debug!(triggers = bound, "data modal bound");
        Ok(bound)
    }
}
