use std::{fmt, fs::read_to_string, path::PathBuf};

use anyhow::{Context, Result};
use font_archive::Fetcher;
use font_face::{FontRegistry, parse};
use log::info;

/// Where a stylesheet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetSource {
    Url(String),
    File(PathBuf),
}

impl StylesheetSource {
    /// Interpret a command-line argument: `http://` and `https://` values are
    /// URLs, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for StylesheetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read the stylesheet text from `source`.
pub fn load_stylesheet(source: &StylesheetSource, fetcher: &dyn Fetcher) -> Result<String> {
    let css = match source {
        StylesheetSource::Url(url) => fetcher.fetch_stylesheet(url).map_err(anyhow::Error::from),
        StylesheetSource::File(path) => {
            read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
    }
    .context("error loading CSS")?;

    info!("Loaded {} bytes of CSS from {source}", css.len());
    Ok(css)
}

/// Load the stylesheet from `source` and parse it into a registry.
///
/// Returns the stylesheet text along with the registry.
pub fn load_registry(
    source: &StylesheetSource,
    fetcher: &dyn Fetcher,
) -> Result<(String, FontRegistry)> {
    let css = load_stylesheet(source, fetcher)?;
    let registry = parse(&css).context("error parsing CSS")?;
    info!("Found {} font faces in {source}", registry.len());
    Ok((css, registry))
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use font_archive::FetchError;

    use super::*;

    struct NotFound;

    impl Fetcher for NotFound {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            Err(FetchError::Status { url: url.to_string(), status: 404 })
        }
    }

    #[test]
    fn test_from_arg() {
        assert_eq!(
            StylesheetSource::from_arg("https://fonts.googleapis.com/css2?family=Roboto"),
            StylesheetSource::Url("https://fonts.googleapis.com/css2?family=Roboto".into())
        );
        assert_eq!(
            StylesheetSource::from_arg("fonts/google.css"),
            StylesheetSource::File(PathBuf::from("fonts/google.css"))
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts.css");
        write(&path, "@font-face { font-family: A; src: url(https://x/a.woff2); }").unwrap();

        let (_, registry) = load_registry(&StylesheetSource::File(path), &NotFound).unwrap();
        assert!(registry.contains_key("a-latin-normal-400"));
    }

    #[test]
    fn test_load_failure_phase() {
        let source = StylesheetSource::Url("https://x/css".into());
        let err = load_registry(&source, &NotFound).unwrap_err();

        assert_eq!(err.to_string(), "error loading CSS");
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn test_parse_failure_phase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.css");
        write(&path, "@font-face { font-family: A;").unwrap();

        let err = load_registry(&StylesheetSource::File(path), &NotFound).unwrap_err();
        assert_eq!(err.to_string(), "error parsing CSS");
        assert!(err.downcast_ref::<font_face::ParseError>().is_some());
    }
}
