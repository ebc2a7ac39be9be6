//! Project a font selection back into consumer-ready CSS and a theme manifest.
//!
//! Both outputs reference fonts by the file names used inside the archive,
//! `{key}.{format}`, instead of their remote URLs.

mod css;
mod error;
mod manifest;

pub use css::{CssOptions, DEFAULT_FONT_DISPLAY, DEFAULT_FONTS_PATH, to_css};
pub use error::ExportError;
pub use manifest::{
    DEFAULT_ASSET_PREFIX, FontFaceVariant, FontFamily, MANIFEST_VERSION, Manifest, ManifestOptions,
    Settings, Typography, slugify, to_manifest, to_manifest_string,
};
