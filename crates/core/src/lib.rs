//! Fontpack Core - load a font stylesheet, select faces, and package them
//! for local hosting.

pub mod api;
pub mod config;
pub mod pipeline;

pub use api::{ApiResponse, BuildRequest, BuildResponse, ErrorResponse, handle_build};
pub use font_archive::{CancelToken, FetchOptions, Fetcher, HttpFetcher};
pub use font_export::{CssOptions, ManifestOptions, to_css, to_manifest_string};
pub use font_face::{FontFaceEntry, FontKey, FontRegistry};
pub use pipeline::{
    PackOptions, Package, PipelineContext, Selector, StylesheetSource, load_registry,
    load_stylesheet, pack, run_step,
};
