//! Concurrent font download and zip packing.

use std::{
    io::{Cursor, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use font_face::{FontFaceEntry, FontKey, FontRegistry};
use log::{debug, info, warn};
use rayon::{ThreadPoolBuilder, prelude::*};
use zip::{ZipWriter, write::SimpleFileOptions};

use crate::{
    cancel::CancelToken,
    error::{ArchiveError, FailedFetch, FetchError, Result},
    fetch::Fetcher,
};

/// Result of one download worker.
enum Outcome {
    Fetched(Vec<u8>),
    Failed(FetchError),
    Skipped,
}

/// Downloads the fonts of a selection and packs them into a zip archive.
///
/// Every entry is fetched on its own worker of a dedicated thread pool,
/// unless [`max_concurrency`](Self::max_concurrency) caps the pool. The
/// archive is assembled only after all workers have finished, and only when
/// every download succeeded.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use font_archive::{ArchiveBuilder, FetchOptions, HttpFetcher};
///
/// let css = "@font-face { font-family: A; src: url(https://x/a.woff2); }";
/// let registry = font_face::parse(css).unwrap();
/// let fetcher = Arc::new(HttpFetcher::new(&FetchOptions::default()).unwrap());
/// let zip = ArchiveBuilder::new(fetcher).build(&registry).unwrap();
/// ```
pub struct ArchiveBuilder {
    fetcher: Arc<dyn Fetcher>,
    max_concurrency: Option<usize>,
    cancel: CancelToken,
}

impl ArchiveBuilder {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher, max_concurrency: None, cancel: CancelToken::new() }
    }

    /// Limit the number of simultaneous downloads. Unlimited by default.
    pub fn max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = Some(limit.max(1));
        self
    }

    /// Use `token` to abort downloads that have not started yet.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Download every entry of `selection` and return the zip archive bytes.
    ///
    /// Each font is stored as `{key}.{format}`. If any download fails, the
    /// remaining queued downloads are skipped and all observed failures are
    /// reported in [`ArchiveError::Fetch`].
    pub fn build(&self, selection: &FontRegistry) -> Result<Vec<u8>> {
        selection.ensure_not_empty()?;

        let entries: Vec<(&FontKey, &FontFaceEntry)> = selection.iter().collect();
        let workers = self.max_concurrency.unwrap_or(entries.len()).min(entries.len());
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("font-fetch-{i}"))
            .build()?;

        info!("Downloading {} fonts with {workers} workers", entries.len());

        let failed = AtomicBool::new(false);
        let outcomes: Vec<Outcome> = pool.install(|| {
            entries.par_iter().map(|(key, entry)| self.fetch_one(key, entry, &failed)).collect()
        });

        let mut payloads = Vec::with_capacity(entries.len());
        let mut failures = Vec::new();
        let mut skipped = 0;
        for ((key, entry), outcome) in entries.iter().zip(outcomes) {
            match outcome {
                Outcome::Fetched(data) => payloads.push((key.file_name(entry.source().format()), data)),
                Outcome::Failed(error) => failures.push(FailedFetch {
                    key: (*key).clone(),
                    url: entry.source().url().to_string(),
                    error,
                }),
                Outcome::Skipped => skipped += 1,
            }
        }

        if !failures.is_empty() {
            return Err(ArchiveError::Fetch { failures, total: entries.len() });
        }
        if skipped > 0 {
            return Err(ArchiveError::Cancelled);
        }

        write_zip(payloads)
    }

    fn fetch_one(&self, key: &FontKey, entry: &FontFaceEntry, failed: &AtomicBool) -> Outcome {
        if self.cancel.is_cancelled() || failed.load(Ordering::Relaxed) {
            debug!("{key}: skipped");
            return Outcome::Skipped;
        }

        match self.fetcher.fetch(entry.source().url()) {
            Ok(data) => {
                debug!("{key}: {} bytes", data.len());
                Outcome::Fetched(data)
            }
            Err(error) => {
                warn!("{key}: {error}");
                failed.store(true, Ordering::Relaxed);
                Outcome::Failed(error)
            }
        }
    }
}

/// Pack `(file name, data)` pairs into an in-memory zip archive.
pub fn write_zip(files: impl IntoIterator<Item = (String, Vec<u8>)>) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (name, data) in files {
        writer.start_file(name, options)?;
        writer.write_all(&data)?;
    }

    Ok(writer.finish()?.into_inner())
}
