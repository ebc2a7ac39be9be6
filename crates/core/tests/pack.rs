//! End-to-end packaging against an in-memory font host.

use std::{
    fs::{File, read_to_string},
    io::Read,
    sync::Arc,
};

use font_archive::{FetchError, Fetcher};
use fontpack_core::{PackOptions, PipelineContext, Selector, StylesheetSource};
use zip::ZipArchive;

const CSS_URL: &str = "https://fonts.example/css2?family=Roboto";

const CSS: &str = "\
/* cyrillic */
@font-face {
  font-family: 'Roboto';
  font-style: normal;
  font-weight: 400;
  src: url(https://fonts.example/s/roboto-cyrillic.woff2) format('woff2');
  unicode-range: U+0301, U+0400-045F;
}
/* latin */
@font-face {
  font-family: 'Roboto';
  font-style: normal;
  font-weight: 400;
  src: url(https://fonts.example/s/roboto-latin.woff2) format('woff2');
  unicode-range: U+0000-00FF;
}
/* latin */
@font-face {
  font-family: 'Roboto Mono';
  font-style: normal;
  font-weight: 700;
  src: url(https://fonts.example/s/mono-latin.woff) format('woff');
  unicode-range: U+0000-00FF;
}
";

/// Serves the stylesheet and answers every font URL with its own path.
struct FontHost;

impl Fetcher for FontHost {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        if url == CSS_URL {
            return Ok(CSS.as_bytes().to_vec());
        }
        match url.strip_prefix("https://fonts.example/s/") {
            Some(path) => Ok(path.as_bytes().to_vec()),
            None => Err(FetchError::Status { url: url.to_string(), status: 404 }),
        }
    }
}

fn context() -> PipelineContext {
    PipelineContext::with_fetcher(Arc::new(FontHost), PackOptions::default())
}

fn archived(path: &std::path::Path) -> Vec<(String, String)> {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).unwrap();
            let mut data = String::new();
            file.read_to_string(&mut data).unwrap();
            (file.name().to_string(), data)
        })
        .collect()
}

#[test]
fn test_pack_latin_selection() {
    let dir = tempfile::tempdir().unwrap();
    let source = StylesheetSource::from_arg(CSS_URL);
    let selector = Selector::new(vec![], vec!["latin".into()]);

    context().run(&source, &selector, dir.path()).unwrap();

    assert_eq!(
        archived(&dir.path().join("fonts.zip")),
        [
            ("roboto-latin-normal-400.woff2".to_string(), "roboto-latin.woff2".to_string()),
            ("roboto-mono-latin-normal-700.woff".to_string(), "mono-latin.woff".to_string()),
        ]
    );

    let css = read_to_string(dir.path().join("fonts.css")).unwrap();
    assert!(css.contains("src: url(../fonts/roboto-latin-normal-400.woff2) format('woff2')"));
    assert!(css.contains("src: url(../fonts/roboto-mono-latin-normal-700.woff) format('woff')"));
    assert!(!css.contains("cyrillic"));

    let manifest: serde_json::Value =
        serde_json::from_str(&read_to_string(dir.path().join("theme.json")).unwrap()).unwrap();
    let families = manifest["settings"]["typography"]["fontFamilies"].as_array().unwrap();
    assert_eq!(families.len(), 2);
    assert_eq!(families[0]["slug"], "roboto");
    assert_eq!(
        families[1]["fontFace"][0]["src"],
        "file:./assets/fonts/roboto-mono-latin-normal-700.woff"
    );
}

#[test]
fn test_pack_explicit_keys() {
    let ctx = context();
    let (_, registry) = ctx.load_registry(&StylesheetSource::from_arg(CSS_URL)).unwrap();
    let selection = Selector::new(vec!["roboto-cyrillic-normal-400".into()], vec![])
        .apply(&registry)
        .unwrap();

    let package = ctx.pack(&selection).unwrap();

    assert!(package.data_uri().starts_with("data:application/zip;base64,UEsD"));
    let mut archive = ZipArchive::new(std::io::Cursor::new(package.archive)).unwrap();
    assert_eq!(archive.len(), 1);
    assert_eq!(archive.by_index(0).unwrap().name(), "roboto-cyrillic-normal-400.woff2");
}

#[test]
fn test_load_stylesheet_keeps_text() {
    let css = context().load_stylesheet(&StylesheetSource::from_arg(CSS_URL)).unwrap();
    assert_eq!(css, CSS);
}

#[test]
fn test_pack_empty_selection() {
    let ctx = context();
    let (_, registry) = ctx.load_registry(&StylesheetSource::from_arg(CSS_URL)).unwrap();
    let selection = Selector::new(vec![], vec!["greek".into()]).apply(&registry).unwrap();

    let err = ctx.pack(&selection).unwrap_err();
    assert_eq!(err.to_string(), "error building archive");
    assert!(err.downcast_ref::<font_face::EmptySelection>().is_some());
}
