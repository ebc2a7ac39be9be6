//! Download the fonts referenced by a font registry and pack them into a zip archive.

mod builder;
mod cancel;
mod error;
mod fetch;

pub use builder::{ArchiveBuilder, write_zip};
pub use cancel::CancelToken;
pub use error::{ArchiveError, FailedFetch, FetchError, Result};
pub use fetch::{
    DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, FetchOptions, Fetcher, HttpFetcher, STYLESHEET_ACCEPT,
};

/// Build an archive for `selection` with default settings.
///
/// Convenience wrapper around [`ArchiveBuilder`].
pub fn build_archive(
    fetcher: std::sync::Arc<dyn Fetcher>,
    selection: &font_face::FontRegistry,
) -> Result<Vec<u8>> {
    ArchiveBuilder::new(fetcher).build(selection)
}
