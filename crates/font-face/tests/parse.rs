//! Parsing tests against a captured Google Fonts CSS response.

use font_face::{FontKey, FontSource, ParseError, parse};

const ROBOTO_CSS: &str = include_str!("fixtures/roboto.css");

fn keys(css: &str) -> Vec<String> {
    parse(css).unwrap().keys().map(FontKey::to_string).collect()
}

#[test]
fn test_google_fonts_response() {
    let registry = parse(ROBOTO_CSS).unwrap();

    assert_eq!(
        keys(ROBOTO_CSS),
        [
            "roboto-cyrillic-italic-400",
            "roboto-latin-italic-400",
            "roboto-cyrillic-normal-400",
            "roboto-latin-ext-normal-400",
            "roboto-latin-normal-400",
            "roboto-mono-latin-normal-700",
        ]
    );

    let entry = registry.get("roboto-latin-ext-normal-400").unwrap();
    assert_eq!(entry.charset(), "latin-ext");
    assert_eq!(entry.font_family(), "'Roboto'");
    assert_eq!(entry.font_style(), "normal");
    assert_eq!(entry.font_weight(), "400");
    assert!(entry.unicode_range().starts_with("U+0100-02BA, U+02BD-02C5"));
    assert_eq!(
        entry.source(),
        &FontSource::new(
            "https://fonts.gstatic.com/s/roboto/v47/KFO7CnqEu92Fr1ME7kSn66aGLdTylUAMa3-UBGEe.woff2",
            "woff2"
        )
    );
}

#[test]
fn test_single_rule_scenario() {
    let css = "/* latin */\n@font-face{font-family:'Roboto';font-style:normal;font-weight:100;src:url(https://x/a.woff2) format('woff2');unicode-range:U+0000-00FF;}";
    let registry = parse(css).unwrap();

    assert_eq!(registry.len(), 1);
    let entry = registry.get("roboto-latin-normal-100").unwrap();
    assert_eq!(entry.source(), &FontSource::new("https://x/a.woff2", "woff2"));
    assert_eq!(entry.unicode_range(), "U+0000-00FF");
    assert_eq!(entry.charset(), "latin");
}

#[test]
fn test_duplicate_tuple_last_wins() {
    let css = "\
/* latin */
@font-face { font-family: 'Roboto'; font-style: normal; font-weight: 400; src: url(https://x/first.woff2) format('woff2'); unicode-range: U+0000-00FF; }
/* greek */
@font-face { font-family: 'Roboto'; font-style: normal; font-weight: 400; src: url(https://x/greek.woff2) format('woff2'); }
/* latin */
@font-face { font-family: 'Roboto'; font-style: normal; font-weight: 400; src: url(https://x/second.woff) format('woff'); unicode-range: U+0100-017F; }
";
    let registry = parse(css).unwrap();

    assert_eq!(keys(css), ["roboto-latin-normal-400", "roboto-greek-normal-400"]);
    let entry = registry.get("roboto-latin-normal-400").unwrap();
    assert_eq!(entry.source(), &FontSource::new("https://x/second.woff", "woff"));
    assert_eq!(entry.unicode_range(), "U+0100-017F");
}

#[test]
fn test_distinct_tuple_count() {
    // 5 rules, 3 distinct keys
    let css = "\
@font-face { font-family: A; font-weight: 400; src: url(https://x/1.woff2); }
@font-face { font-family: A; font-weight: 700; src: url(https://x/2.woff2); }
@font-face { font-family: 'A'; font-weight: 400; src: url(https://x/3.woff2); }
/* latin-ext */
@font-face { font-family: A; font-weight: 400; src: url(https://x/4.woff2); }
@font-face { font-family: a; font-weight: 700; src: url(https://x/5.woff2); }
";
    let registry = parse(css).unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.get("a-latin-normal-700").unwrap().source().url(), "https://x/5.woff2");
}

#[test]
fn test_other_rules_are_ignored() {
    let css = "\
@charset \"utf-8\";
@import url(https://example.com/base.css);
body { font-family: 'Roboto', sans-serif; }
/* cyrillic */
.title { font-weight: 700 }
@font-face { font-family: 'Roboto'; src: url(https://x/a.woff2) format('woff2'); }
";
    let registry = parse(css).unwrap();

    assert_eq!(keys(css), ["roboto-latin-normal-400"]);
    assert_eq!(registry.get("roboto-latin-normal-400").unwrap().charset(), "latin");
}

#[test]
fn test_non_comment_predecessor_defaults_to_latin() {
    let css = "/* cyrillic */ @page { margin: 0 } @font-face { font-family: A; src: url(https://x/a.woff2); }";
    assert_eq!(keys(css), ["a-latin-normal-400"]);
}

#[test]
fn test_empty_stylesheet() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("/* nothing here */").unwrap().is_empty());
}

#[test]
fn test_malformed_stylesheet() {
    let err = parse("/* latin */\n@font-face { font-family: 'Roboto'; src: url(https://x/a.woff2)").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { line: 2, .. }), "{err}");
}

#[test]
fn test_registry_serializes_in_order() {
    let registry = parse(ROBOTO_CSS).unwrap();
    let json = serde_json::to_string(&registry).unwrap();

    let italic = json.find("\"roboto-latin-italic-400\"").unwrap();
    let normal = json.find("\"roboto-cyrillic-normal-400\"").unwrap();
    assert!(italic < normal);
    assert!(json.contains("\"fontFamily\":\"'Roboto'\""));
}
