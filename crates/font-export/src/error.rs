use font_face::EmptySelection;
use thiserror::Error;

/// Error types for manifest rendering.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    EmptySelection(#[from] EmptySelection),

    #[error("failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}
