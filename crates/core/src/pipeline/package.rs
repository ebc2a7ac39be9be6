use std::{
    fs::{create_dir_all, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use log::info;

use crate::config::{ARCHIVE_FILENAME, ARCHIVE_MIME, CSS_FILENAME, MANIFEST_FILENAME};

/// The three outputs produced for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Zip archive holding one `{key}.{format}` file per selected font.
    pub archive: Vec<u8>,
    /// Stylesheet pointing at the archived files.
    pub css: String,
    /// Pretty-printed theme manifest.
    pub manifest: String,
}

impl Package {
    pub fn archive_base64(&self) -> String {
        STANDARD.encode(&self.archive)
    }

    /// The archive as a `data:application/zip;base64,...` URI.
    pub fn data_uri(&self) -> String {
        format!("data:{ARCHIVE_MIME};base64,{}", self.archive_base64())
    }

    /// Write `fonts.zip`, `fonts.css` and `theme.json` into `dir`, creating it
    /// if needed. Returns the written paths.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

        let files: [(&str, &[u8]); 3] = [
            (ARCHIVE_FILENAME, &self.archive),
            (CSS_FILENAME, self.css.as_bytes()),
            (MANIFEST_FILENAME, self.manifest.as_bytes()),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (name, data) in files {
            let path = dir.join(name);
            write(&path, data).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} ({} bytes)", path.display(), data.len());
            written.push(path);
        }
        Ok(written)
    }
}
