//! Native HTTP table source.

use crate::error::{LoadError, LoadResult};
use crate::loader::TableSource;
use reqwest::Client;

/// [`TableSource`] that resolves source paths against a base URL.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source for the site at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a source using an existing client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full URL for a source path.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl TableSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> LoadResult<String> {
        let url = self.url_for(path);
        tracing::debug!(url = %url, "requesting table");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))
    }
}
