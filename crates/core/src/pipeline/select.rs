use font_face::{FontRegistry, UnknownKey};

/// Narrows a registry down to the fonts a user asked for.
///
/// With no keys and no charsets every entry is selected.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    pub keys: Vec<String>,
    pub charsets: Vec<String>,
}

impl Selector {
    pub fn new(keys: Vec<String>, charsets: Vec<String>) -> Self {
        Self { keys, charsets }
    }

    /// Apply the selection to `registry`.
    ///
    /// Explicit keys keep the order they were given in; the charset filter
    /// keeps registry order.
    pub fn apply(&self, registry: &FontRegistry) -> Result<FontRegistry, UnknownKey> {
        let selected = if self.keys.is_empty() {
            registry.clone()
        } else {
            registry.select(&self.keys)?
        };

        if self.charsets.is_empty() {
            return Ok(selected);
        }
        Ok(selected.filter(|_, entry| self.charsets.iter().any(|c| c == entry.charset())))
    }
}

#[cfg(test)]
mod tests {
    use font_face::parse;

    use super::*;

    const CSS: &str = "\
/* cyrillic */
@font-face { font-family: 'Roboto'; src: url(https://x/c.woff2) format('woff2'); }
/* latin */
@font-face { font-family: 'Roboto'; src: url(https://x/l.woff2) format('woff2'); }
/* latin */
@font-face { font-family: 'Roboto'; font-weight: 700; src: url(https://x/b.woff2) format('woff2'); }
";

    fn keys(registry: &FontRegistry) -> Vec<&str> {
        registry.keys().map(|k| k.as_str()).collect()
    }

    #[test]
    fn test_select_all_by_default() {
        let registry = parse(CSS).unwrap();
        let selection = Selector::default().apply(&registry).unwrap();
        assert_eq!(selection, registry);
    }

    #[test]
    fn test_select_by_charset() {
        let registry = parse(CSS).unwrap();
        let selection = Selector::new(vec![], vec!["latin".into()]).apply(&registry).unwrap();
        assert_eq!(keys(&selection), ["roboto-latin-normal-400", "roboto-latin-normal-700"]);
    }

    #[test]
    fn test_keys_and_charsets_intersect() {
        let registry = parse(CSS).unwrap();
        let selector = Selector::new(
            vec!["roboto-latin-normal-700".into(), "roboto-cyrillic-normal-400".into()],
            vec!["latin".into()],
        );
        assert_eq!(keys(&selector.apply(&registry).unwrap()), ["roboto-latin-normal-700"]);
    }

    #[test]
    fn test_unknown_key() {
        let registry = parse(CSS).unwrap();
        let err = Selector::new(vec!["nope".into()], vec![]).apply(&registry).unwrap_err();
        assert_eq!(err.0, "nope");
    }
}
