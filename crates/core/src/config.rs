//! Configuration constants for font packaging.

pub use font_archive::{DEFAULT_USER_AGENT as USER_AGENT, STYLESHEET_ACCEPT};
pub use font_export::{DEFAULT_ASSET_PREFIX, DEFAULT_FONTS_PATH, MANIFEST_VERSION};

/// Per-request timeout for stylesheet and font downloads, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// File name of the font archive.
pub const ARCHIVE_FILENAME: &str = "fonts.zip";

/// File name of the regenerated stylesheet.
pub const CSS_FILENAME: &str = "fonts.css";

/// File name of the theme manifest.
pub const MANIFEST_FILENAME: &str = "theme.json";

/// MIME type of the archive, used in data URIs.
pub const ARCHIVE_MIME: &str = "application/zip";

/// Content type accepted by the request boundary.
pub const JSON_CONTENT_TYPE: &str = "application/json";
