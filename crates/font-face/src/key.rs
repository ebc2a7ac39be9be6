//! Canonical font keys.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Deduplication and lookup identifier derived from family, charset, style and weight.
///
/// The key is `family-charset-style-weight` with single quotes and square
/// brackets removed, spaces turned into hyphens, and everything lowercased.
/// It doubles as the file stem of the archived font.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontKey(String);

impl FontKey {
    pub fn new(family: &str, charset: &str, style: &str, weight: &str) -> Self {
        let raw = format!("{family}-{charset}-{style}-{weight}");
        let key: String = raw
            .chars()
            .filter(|c| !matches!(c, '\'' | '[' | ']'))
            .map(|c| if c == ' ' { '-' } else { c })
            .collect();
        Self(key.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Archive file name for this key: `{key}.{format}`.
    pub fn file_name(&self, format: &str) -> String {
        format!("{}.{format}", self.0)
    }
}

impl fmt::Display for FontKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FontKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FontKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}
