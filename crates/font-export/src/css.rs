//! `@font-face` CSS regeneration.

use std::fmt;

use font_face::{EmptySelection, FontFaceEntry, FontKey, FontRegistry};

/// Directory the regenerated CSS points at, relative to the stylesheet.
pub const DEFAULT_FONTS_PATH: &str = "../fonts";

/// `font-display` value written into every regenerated block.
pub const DEFAULT_FONT_DISPLAY: &str = "swap";

/// Settings for [`to_css`].
#[derive(Debug, Clone)]
pub struct CssOptions {
    pub fonts_path: String,
    pub font_display: String,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self { fonts_path: DEFAULT_FONTS_PATH.to_string(), font_display: DEFAULT_FONT_DISPLAY.to_string() }
    }
}

impl CssOptions {
    pub fn with_fonts_path(mut self, path: impl Into<String>) -> Self {
        self.fonts_path = path.into();
        self
    }
}

/// One regenerated `@font-face` block with its charset comment.
struct FontFaceBlock<'a> {
    key: &'a FontKey,
    entry: &'a FontFaceEntry,
    options: &'a CssOptions,
}

impl fmt::Display for FontFaceBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.entry;
        let format = entry.source().format();
        let fonts_path = self.options.fonts_path.trim_end_matches('/');

        writeln!(f, "/* {} */", entry.charset())?;
        writeln!(f, "@font-face {{")?;
        writeln!(f, "  font-family: {};", entry.font_family())?;
        writeln!(f, "  font-style: {};", entry.font_style())?;
        writeln!(f, "  font-weight: {};", entry.font_weight())?;
        writeln!(f, "  font-display: {};", self.options.font_display)?;
        writeln!(f, "  src: url({fonts_path}/{}) format('{format}');", self.key.file_name(format))?;
        if !entry.unicode_range().is_empty() {
            writeln!(f, "  unicode-range: {};", entry.unicode_range())?;
        }
        writeln!(f, "}}")
    }
}

/// Render `selection` as `@font-face` rules that load fonts from
/// `{fonts_path}/{key}.{format}`.
///
/// Each rule is preceded by a comment holding its charset, so parsing the
/// output recovers the same keys.
pub fn to_css(selection: &FontRegistry, options: &CssOptions) -> Result<String, EmptySelection> {
    selection.ensure_not_empty()?;

    Ok(selection
        .iter()
        .map(|(key, entry)| FontFaceBlock { key, entry, options }.to_string())
        .collect())
}
