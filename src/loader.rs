//! Table loading with a session cache.
//!
//! A [`TableSource`] performs the actual retrieval (fetch API, HTTP client,
//! in-memory fixtures). [`TableFetcher`] puts the parser and the
//! [`TableCache`] in front of it.

use crate::cache::TableCache;
use crate::data::ParsedTable;
use crate::error::{LoadError, LoadResult};
use crate::parser::parse_table;
use std::future::Future;
use std::rc::Rc;

/// Trait for async providers of delimited-text resources.
///
/// Implement this trait to retrieve resources through your I/O mechanism.
/// Non-success statuses map to [`LoadError::Status`] and transport failures
/// to [`LoadError::Network`].
///
/// No `Send` bounds, so it works in both native and WASM (single-threaded)
/// contexts.
pub trait TableSource {
    /// Read the full body of the resource at `path` as text.
    fn fetch_text(&self, path: &str) -> impl Future<Output = LoadResult<String>>;
}

/// Fetches, parses and memoizes tables by source path.
///
/// Build one per page session and share it between trigger handlers.
/// Concurrent first requests for the same path are not de-duplicated: both
/// fetch, and the first table stored wins.
#[derive(Debug)]
pub struct TableFetcher<S> {
    source: S,
    cache: TableCache,
}

impl<S: TableSource> TableFetcher<S> {
    /// Create a fetcher with an empty cache.
    pub fn new(source: S) -> Self {
        Self::with_cache(source, TableCache::new())
    }

    /// Create a fetcher around an existing cache.
    pub fn with_cache(source: S, cache: TableCache) -> Self {
        Self { source, cache }
    }

    /// Get the table for `path`, fetching and parsing it on first use.
    ///
    /// Failed loads are not cached, so a later call retries.
    pub async fn fetch_table(&self, path: &str) -> Result<Rc<ParsedTable>, LoadError> {
        if let Some(table) = self.cache.get(path) {
            tracing::debug!(path, "table cache hit");
            return Ok(table);
        }

        tracing::debug!(path, "fetching table");
        let text = self.source.fetch_text(path).await?;
        let table = parse_table(&text)?;

        tracing::info!(
            path,
            rows = table.row_count(),
            columns = table.column_count(),
            "table cached"
        );
        Ok(self.cache.insert(path, table))
    }

    /// The session cache.
    pub fn cache(&self) -> &TableCache {
        &self.cache
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Web fetch API source.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Response, Window};

    /// [`TableSource`] backed by `window.fetch`.
    #[derive(Clone, Debug)]
    pub struct FetchSource {
        window: Window,
    }

    impl FetchSource {
        /// Create a source for the current window, if there is one.
        pub fn new() -> Option<Self> {
            web_sys::window().map(|window| Self { window })
        }
    }

    fn network_error(value: JsValue) -> LoadError {
        LoadError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }

    impl TableSource for FetchSource {
        async fn fetch_text(&self, path: &str) -> LoadResult<String> {
            let response = JsFuture::from(self.window.fetch_with_str(path))
                .await
                .map_err(network_error)?
                .dyn_into::<Response>()
                .map_err(network_error)?;

            if !response.ok() {
                return Err(LoadError::Status {
                    status: response.status(),
                });
            }

            let text = JsFuture::from(response.text().map_err(network_error)?)
                .await
                .map_err(network_error)?;
            text.as_string()
                .ok_or_else(|| LoadError::Network("response body is not text".to_string()))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// In-memory source that counts retrievals.
    #[derive(Default)]
    pub(crate) struct MemorySource {
        bodies: HashMap<String, LoadResult<String>>,
        pub(crate) fetches: Cell<usize>,
    }

    impl MemorySource {
        pub(crate) fn with(mut self, path: &str, body: &str) -> Self {
            self.bodies.insert(path.to_string(), Ok(body.to_string()));
            self
        }

        pub(crate) fn failing(mut self, path: &str, error: LoadError) -> Self {
            self.bodies.insert(path.to_string(), Err(error));
            self
        }
    }

    impl TableSource for MemorySource {
        async fn fetch_text(&self, path: &str) -> LoadResult<String> {
            self.fetches.set(self.fetches.get() + 1);
            self.bodies
                .get(path)
                .cloned()
                .unwrap_or(Err(LoadError::Status { status: 404 }))
        }
    }

    #[test]
    fn test_fetch_parses_body() {
        let source = MemorySource::default().with("a.csv", "x,y\n1,2\n");
        let fetcher = TableFetcher::new(source);

        let table = block_on(fetcher.fetch_table("a.csv")).unwrap();
        assert_eq!(table.headers, vec!["x", "y"]);
        assert_eq!(table.rows[0].get("y"), Some("2"));
        assert!(fetcher.cache().contains("a.csv"));
    }

    #[test]
    fn test_second_fetch_hits_cache() {
        let source = MemorySource::default().with("a.csv", "x\n1\n");
        let fetcher = TableFetcher::new(source);

        let first = block_on(fetcher.fetch_table("a.csv")).unwrap();
        let second = block_on(fetcher.fetch_table("a.csv")).unwrap();

        assert_eq!(fetcher.source().fetches.get(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_paths_fetch_separately() {
        let source = MemorySource::default()
            .with("a.csv", "x\n1\n")
            .with("b.csv", "y\n2\n");
        let fetcher = TableFetcher::new(source);

        block_on(fetcher.fetch_table("a.csv")).unwrap();
        block_on(fetcher.fetch_table("b.csv")).unwrap();

        assert_eq!(fetcher.source().fetches.get(), 2);
        assert_eq!(fetcher.cache().paths(), vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_status_error_not_cached() {
        let source = MemorySource::default();
        let fetcher = TableFetcher::new(source);

        let err = block_on(fetcher.fetch_table("missing.csv")).unwrap_err();
        assert_eq!(err, LoadError::Status { status: 404 });
        assert!(fetcher.cache().is_empty());

        block_on(fetcher.fetch_table("missing.csv")).unwrap_err();
        assert_eq!(fetcher.source().fetches.get(), 2);
    }

    #[test]
    fn test_network_error_propagates() {
        let source = MemorySource::default()
            .failing("a.csv", LoadError::Network("connection reset".into()));
        let fetcher = TableFetcher::new(source);

        let err = block_on(fetcher.fetch_table("a.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Network(_)));
    }

    #[test]
    fn test_empty_body_is_parse_error() {
        let source = MemorySource::default().with("empty.csv", "\n\n");
        let fetcher = TableFetcher::new(source);

        let err = block_on(fetcher.fetch_table("empty.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(!fetcher.cache().contains("empty.csv"));
    }
}
