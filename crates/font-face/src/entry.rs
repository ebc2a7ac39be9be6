//! Font-face records.

use serde::Serialize;

use crate::key::FontKey;

/// Charset assumed when a rule carries no annotation.
pub const DEFAULT_CHARSET: &str = "latin";

/// Initial value of the `font-style` descriptor.
pub const DEFAULT_FONT_STYLE: &str = "normal";

/// Initial value of the `font-weight` descriptor.
pub const DEFAULT_FONT_WEIGHT: &str = "400";

/// Remote font binary referenced by a rule's `src` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontSource {
    url: String,
    format: String,
}

impl FontSource {
    pub fn new(url: impl Into<String>, format: impl Into<String>) -> Self {
        Self { url: url.into(), format: format.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

/// One parsed (or synthesized) `@font-face` record.
///
/// Descriptor values are kept as the literal declaration text so that
/// regenerated CSS reproduces them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFaceEntry {
    charset: String,
    font_family: String,
    font_style: String,
    font_weight: String,
    unicode_range: String,
    source: FontSource,
}

impl FontFaceEntry {
    pub fn new(
        charset: impl Into<String>,
        font_family: impl Into<String>,
        font_style: impl Into<String>,
        font_weight: impl Into<String>,
        unicode_range: impl Into<String>,
        source: FontSource,
    ) -> Self {
        Self {
            charset: charset.into(),
            font_family: font_family.into(),
            font_style: font_style.into(),
            font_weight: font_weight.into(),
            unicode_range: unicode_range.into(),
            source,
        }
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_style(&self) -> &str {
        &self.font_style
    }

    pub fn font_weight(&self) -> &str {
        &self.font_weight
    }

    pub fn unicode_range(&self) -> &str {
        &self.unicode_range
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Canonical registry key of this entry.
    pub fn key(&self) -> FontKey {
        FontKey::new(&self.font_family, &self.charset, &self.font_style, &self.font_weight)
    }

    /// Family name with quote characters removed, for display.
    pub fn display_family(&self) -> String {
        self.font_family.replace(['\'', '"'], "")
    }
}
