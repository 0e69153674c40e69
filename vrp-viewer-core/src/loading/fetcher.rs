#[cfg(test)]
#[path = "../../tests/unit/loading/fetcher_test.rs"]
mod fetcher_test;

use crate::utils::FetchError;
use serde_json::Value;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Retrieves json resources by path. Implementations are blocking, a session runs them off the async runtime.
pub trait Fetcher: Send + Sync {
    /// Fetches a resource and parses it as json.
    fn fetch(&self, path: &str) -> Result<Value, FetchError>;
}

/// Fetches resources from a static http server.
pub struct HttpFetcher {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpFetcher {
    /// Creates a new instance of `HttpFetcher`. The timeout bounds a whole request.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder().timeout_global(Some(timeout)).build().into();

        Self { agent, base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    /// Returns an url of the resource with every path segment percent-encoded.
    pub fn url(&self, path: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| FetchError::Transport(format!("invalid base url '{}': {err}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|_| FetchError::Transport(format!("base url cannot have a path: '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));

        Ok(url)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.url(path)?;
        log::trace!("GET {url}");

        let body = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|err| FetchError::Transport(format!("GET {url}: {err}")))?
            .body_mut()
            .read_to_string()
            .map_err(|err| FetchError::Transport(format!("GET {url}: {err}")))?;

        parse_json(&body)
    }
}

/// Fetches resources from a local directory laid out the same way as the served tree.
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    /// Creates a new instance of `DirectoryFetcher`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fetcher for DirectoryFetcher {
    fn fetch(&self, path: &str) -> Result<Value, FetchError> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative.components().any(|component| !matches!(component, Component::Normal(_) | Component::CurDir)) {
            return Err(FetchError::Transport(format!("path escapes data directory: '{path}'")));
        }

        let file_path = self.root.join(relative);
        log::trace!("reading '{}'", file_path.display());

        let text = std::fs::read_to_string(&file_path)
            .map_err(|err| FetchError::Transport(format!("cannot read '{}': {err}", file_path.display())))?;

        parse_json(&text)
    }
}

/// Creates a fetcher for the source: an `http://` or `https://` base url, otherwise a directory.
pub fn create_fetcher(source: &str, timeout: Duration) -> Arc<dyn Fetcher> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Arc::new(HttpFetcher::new(source, timeout))
    } else {
        Arc::new(DirectoryFetcher::new(source))
    }
}

fn parse_json(text: &str) -> Result<Value, FetchError> {
    serde_json::from_str(text).map_err(|err| FetchError::Shape(format!("invalid json: {err}")))
}
