//! Theme font manifest generation.
//!
//! The manifest follows the shape of a `theme.json` typography section: one
//! record per font family, each listing its faces with local asset paths.

use font_face::{EmptySelection, FontRegistry};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{css::DEFAULT_FONT_DISPLAY, error::ExportError};

/// Schema version written at the top of the manifest.
pub const MANIFEST_VERSION: u32 = 2;

/// Location prefix of archived fonts inside a theme.
pub const DEFAULT_ASSET_PREFIX: &str = "file:./assets/fonts";

/// Settings for [`to_manifest`].
#[derive(Debug, Clone)]
pub struct ManifestOptions {
    pub asset_prefix: String,
    pub font_display: String,
    pub version: u32,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
            font_display: DEFAULT_FONT_DISPLAY.to_string(),
            version: MANIFEST_VERSION,
        }
    }
}

impl ManifestOptions {
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = prefix.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub typography: Typography,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_families: Vec<FontFamily>,
}

/// All faces sharing one `font-family` declaration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFamily {
    /// Declaration value as written, quotes included.
    pub font_family: String,
    /// Family name without quotes.
    pub name: String,
    pub slug: String,
    pub font_face: Vec<FontFaceVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFaceVariant {
    pub font_family: String,
    pub font_weight: String,
    pub font_style: String,
    pub font_display: String,
    pub src: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unicode_range: String,
}

impl Manifest {
    pub fn font_families(&self) -> &[FontFamily] {
        &self.settings.typography.font_families
    }
}

/// Lowercase `name` and replace spaces with hyphens.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Group `selection` by family into a manifest.
///
/// Families are matched on the exact `font-family` text, so `'Roboto'` and
/// `Roboto` end up in separate records. Families keep first-seen order and
/// faces keep selection order.
pub fn to_manifest(selection: &FontRegistry, options: &ManifestOptions) -> Result<Manifest, EmptySelection> {
    selection.ensure_not_empty()?;

    let prefix = options.asset_prefix.trim_end_matches('/');
    let mut families: IndexMap<&str, FontFamily> = IndexMap::new();

    for (key, entry) in selection {
        let family = families.entry(entry.font_family()).or_insert_with(|| {
            let name = entry.display_family();
            FontFamily {
                font_family: entry.font_family().to_string(),
                slug: slugify(&name),
                name,
                font_face: Vec::new(),
            }
        });

        family.font_face.push(FontFaceVariant {
            font_family: entry.font_family().to_string(),
            font_weight: entry.font_weight().to_string(),
            font_style: entry.font_style().to_string(),
            font_display: options.font_display.clone(),
            src: format!("{prefix}/{}", key.file_name(entry.source().format())),
            unicode_range: entry.unicode_range().to_string(),
        });
    }

    Ok(Manifest {
        version: options.version,
        settings: Settings {
            typography: Typography { font_families: families.into_values().collect() },
        },
    })
}

/// Render the manifest of `selection` as pretty-printed JSON.
pub fn to_manifest_string(
    selection: &FontRegistry,
    options: &ManifestOptions,
) -> Result<String, ExportError> {
    let manifest = to_manifest(selection, options)?;
    Ok(serde_json::to_string_pretty(&manifest)?)
}
