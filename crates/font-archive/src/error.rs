use std::{fmt, io, result};

use font_face::{EmptySelection, FontKey};
use thiserror::Error;

/// Failure to retrieve a stylesheet or a font binary.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("empty URL")]
    EmptyUrl,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not valid UTF-8")]
    Encoding { url: String },
}

/// One font that could not be downloaded.
#[derive(Debug)]
pub struct FailedFetch {
    pub key: FontKey,
    pub url: String,
    pub error: FetchError,
}

impl fmt::Display for FailedFetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.key, self.url, self.error)
    }
}

/// Error types for archive building.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error(transparent)]
    EmptySelection(#[from] EmptySelection),

    #[error("{} of {total} font downloads failed: {}", .failures.len(), summarize(.failures))]
    Fetch { failures: Vec<FailedFetch>, total: usize },

    #[error("archive build cancelled")]
    Cancelled,

    #[error("failed to start download workers: {0}")]
    Workers(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn summarize(failures: &[FailedFetch]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

pub type Result<T> = result::Result<T, ArchiveError>;
