//! Ordered, deduplicated collection of font faces.

use indexmap::{IndexMap, map::Iter};
use serde::Serialize;

use crate::{
    entry::FontFaceEntry,
    error::{EmptySelection, UnknownKey},
    key::FontKey,
};

/// Mapping from canonical key to font face, in first-encounter order.
///
/// Also used for selections: a selection is any subset of a registry and has
/// the same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FontRegistry {
    faces: IndexMap<FontKey, FontFaceEntry>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under its canonical key.
    ///
    /// An existing entry with the same key is replaced in place, keeping its
    /// original position. Returns the replaced entry.
    pub(crate) fn insert(&mut self, entry: FontFaceEntry) -> Option<FontFaceEntry> {
        self.faces.insert(entry.key(), entry)
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&FontFaceEntry> {
        self.faces.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.faces.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &FontKey> {
        self.faces.keys()
    }

    pub fn iter(&self) -> Iter<'_, FontKey, FontFaceEntry> {
        self.faces.iter()
    }

    /// Fail with [`EmptySelection`] when there is nothing to work on.
    pub fn ensure_not_empty(&self) -> Result<(), EmptySelection> {
        if self.is_empty() { Err(EmptySelection) } else { Ok(()) }
    }

    /// Select entries by key, in the order given.
    ///
    /// Repeated keys are taken once.
    pub fn select<I, K>(&self, keys: I) -> Result<FontRegistry, UnknownKey>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut faces = IndexMap::new();
        for key in keys {
            let key = key.as_ref();
            let (key, entry) =
                self.faces.get_key_value(key).ok_or_else(|| UnknownKey(key.to_string()))?;
            faces.entry(key.clone()).or_insert_with(|| entry.clone());
        }
        Ok(Self { faces })
    }

    /// Select the entries matching `predicate`, in registry order.
    pub fn filter(&self, mut predicate: impl FnMut(&FontKey, &FontFaceEntry) -> bool) -> FontRegistry {
        let faces = self
            .faces
            .iter()
            .filter(|(key, entry)| predicate(key, entry))
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect();
        Self { faces }
    }
}

impl<'a> IntoIterator for &'a FontRegistry {
    type Item = (&'a FontKey, &'a FontFaceEntry);
    type IntoIter = Iter<'a, FontKey, FontFaceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}

impl FromIterator<FontFaceEntry> for FontRegistry {
    /// Build a registry from synthesized entries, with the same last-wins
    /// semantics as parsing.
    fn from_iter<T: IntoIterator<Item = FontFaceEntry>>(iter: T) -> Self {
        let mut registry = Self::new();
        for entry in iter {
            registry.insert(entry);
        }
        registry
    }
}
