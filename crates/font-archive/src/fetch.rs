//! Remote resource retrieval.

use std::time::Duration;

use log::debug;
use reqwest::{
    blocking::{Client, Response},
    header::ACCEPT,
};

use crate::error::FetchError;

/// Browser-like user agent. Font hosts pick the `src` format by client, so a
/// modern browser string yields `woff2` sources.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/106.0.0.0 Safari/537.36";

/// `Accept` header sent when requesting a stylesheet.
pub const STYLESHEET_ACCEPT: &str = "text/css";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves remote resources.
///
/// Implementations are shared across download workers and must be
/// `Send + Sync`.
pub trait Fetcher: Send + Sync {
    /// Fetch the raw bytes at `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    /// Fetch a stylesheet as text.
    fn fetch_stylesheet(&self, url: &str) -> Result<String, FetchError> {
        let bytes = self.fetch(url)?;
        String::from_utf8(bytes).map_err(|_| FetchError::Encoding { url: url.to_string() })
    }
}

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: String,
    /// `None` disables the timeout.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { user_agent: DEFAULT_USER_AGENT.to_string(), timeout: Some(DEFAULT_TIMEOUT) }
    }
}

/// [`Fetcher`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(options: &FetchOptions) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(&options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    fn get(&self, url: &str, accept: Option<&str>) -> Result<Response, FetchError> {
        if url.is_empty() {
            return Err(FetchError::EmptyUrl);
        }

        debug!("GET {url}");
        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }

        let response = request
            .send()
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }
        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.get(url, None)?;
        let bytes = response
            .bytes()
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;
        Ok(bytes.to_vec())
    }

    fn fetch_stylesheet(&self, url: &str) -> Result<String, FetchError> {
        let response = self.get(url, Some(STYLESHEET_ACCEPT))?;
        response.text().map_err(|source| FetchError::Transport { url: url.to_string(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Static(&'static [u8]);

    impl Fetcher for Static {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
            Ok(self.0.to_vec())
        }
    }

    #[test]
    fn test_default_stylesheet_decoding() {
        let css = Static(b"@font-face {}").fetch_stylesheet("https://x/css").unwrap();
        assert_eq!(css, "@font-face {}");
    }

    #[test]
    fn test_invalid_utf8_stylesheet() {
        let err = Static(&[0xff, 0xfe]).fetch_stylesheet("https://x/css").unwrap_err();
        assert!(matches!(err, FetchError::Encoding { .. }));
    }

    #[test]
    fn test_empty_url_rejected() {
        let fetcher = HttpFetcher::new(&FetchOptions::default()).unwrap();
        assert!(matches!(fetcher.fetch(""), Err(FetchError::EmptyUrl)));
    }

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout, Some(Duration::from_secs(30)));
        assert!(options.user_agent.starts_with("Mozilla/5.0"));
    }
}
