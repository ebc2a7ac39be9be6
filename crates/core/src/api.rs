//! JSON request boundary: `{"url": "..."}` in, packaged archive out.

use std::sync::Arc;

use anyhow::Error;
use font_archive::Fetcher;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    config::JSON_CONTENT_TYPE,
    pipeline::{PackOptions, StylesheetSource, load_registry, pack},
};

#[derive(Debug, Deserialize)]
pub struct BuildRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildResponse {
    pub message: String,
    /// The stylesheet as it was loaded.
    pub css: String,
    /// Base64 zip archive of every font in the stylesheet.
    pub userzip: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

/// Status code and optional JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl ApiResponse {
    fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    fn json(status: u16, body: &impl Serialize) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self { status, body: Some(body) },
            Err(_) => Self::empty(500),
        }
    }

    fn failure(error: &Error) -> Self {
        let detail = error.chain().nth(1).map(ToString::to_string).unwrap_or_default();
        warn!("{error:#}");
        Self::json(500, &ErrorResponse { error: error.to_string(), detail })
    }
}

/// Handle a build request.
///
/// The body must be sent as `application/json`; any other content type is
/// rejected with 400 and no body, as is a body that is not a valid request.
/// Load, parse and archive failures answer 500 with the failing phase in
/// `error`.
pub fn handle_build(
    content_type: Option<&str>,
    body: &str,
    fetcher: Arc<dyn Fetcher>,
    options: &PackOptions,
) -> ApiResponse {
    if !is_json(content_type) {
        return ApiResponse::empty(400);
    }
    let Ok(request) = serde_json::from_str::<BuildRequest>(body) else {
        return ApiResponse::empty(400);
    };

    info!("Build requested for {}", request.url);
    let source = StylesheetSource::Url(request.url.clone());
    let (css, registry) = match load_registry(&source, fetcher.as_ref()) {
        Ok(loaded) => loaded,
        Err(err) => return ApiResponse::failure(&err),
    };
    let package = match pack(&registry, fetcher, options) {
        Ok(package) => package,
        Err(err) => return ApiResponse::failure(&err),
    };

    ApiResponse::json(
        200,
        &BuildResponse {
            message: format!("Your url was: {}", request.url),
            css,
            userzip: package.archive_base64(),
        },
    )
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(JSON_CONTENT_TYPE))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use font_archive::FetchError;

    use super::*;

    const CSS_URL: &str = "https://fonts.example/css";
    const CSS: &str = "/* latin */\n@font-face { font-family: 'Roboto'; src: url(https://x/a.woff2) format('woff2'); }";

    struct Site(HashMap<&'static str, &'static [u8]>);

    impl Fetcher for Site {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.0
                .get(url)
                .map(|data| data.to_vec())
                .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
        }
    }

    fn site(entries: &[(&'static str, &'static [u8])]) -> Arc<dyn Fetcher> {
        Arc::new(Site(entries.iter().copied().collect()))
    }

    fn request(url: &str) -> String {
        format!(r#"{{"url": "{url}"}}"#)
    }

    fn error_of(response: &ApiResponse) -> ErrorResponse {
        serde_json::from_str(response.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_rejects_other_content_types() {
        let fetcher = site(&[]);
        let options = PackOptions::default();

        for content_type in [None, Some("text/plain"), Some("application/x-www-form-urlencoded")] {
            let response = handle_build(content_type, &request(CSS_URL), fetcher.clone(), &options);
            assert_eq!(response, ApiResponse { status: 400, body: None });
        }
    }

    #[test]
    fn test_rejects_invalid_json() {
        let response =
            handle_build(Some("application/json"), "{url:", site(&[]), &PackOptions::default());
        assert_eq!(response, ApiResponse { status: 400, body: None });
    }

    #[test]
    fn test_builds_archive() {
        let fetcher = site(&[(CSS_URL, CSS.as_bytes()), ("https://x/a.woff2", b"wOF2".as_slice())]);
        let response = handle_build(
            Some("application/json; charset=utf-8"),
            &request(CSS_URL),
            fetcher,
            &PackOptions::default(),
        );

        assert_eq!(response.status, 200);
        let body: BuildResponse = serde_json::from_str(&response.body.unwrap()).unwrap();
        assert_eq!(body.message, format!("Your url was: {CSS_URL}"));
        assert_eq!(body.css, CSS);
        assert!(!body.userzip.is_empty());
    }

    #[test]
    fn test_load_failure() {
        let response = handle_build(
            Some("application/json"),
            &request(CSS_URL),
            site(&[]),
            &PackOptions::default(),
        );
        assert_eq!(response.status, 500);
        assert_eq!(error_of(&response).error, "error loading CSS");
    }

    #[test]
    fn test_parse_failure() {
        let fetcher = site(&[(CSS_URL, b"@font-face { font-family: A;".as_slice())]);
        let response =
            handle_build(Some("application/json"), &request(CSS_URL), fetcher, &PackOptions::default());
        assert_eq!(response.status, 500);
        assert_eq!(error_of(&response).error, "error parsing CSS");
    }

    #[test]
    fn test_archive_failure() {
        let fetcher = site(&[(CSS_URL, CSS.as_bytes())]);
        let response =
            handle_build(Some("application/json"), &request(CSS_URL), fetcher, &PackOptions::default());

        assert_eq!(response.status, 500);
        let error = error_of(&response);
        assert_eq!(error.error, "error building archive");
        assert!(error.detail.contains("https://x/a.woff2"));
    }
}
