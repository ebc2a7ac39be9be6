//! Font registry construction from `@font-face` rules.

use cssparser::{Parser, ParserInput, Token};
use log::debug;

use crate::{
    entry::{DEFAULT_CHARSET, DEFAULT_FONT_STYLE, DEFAULT_FONT_WEIGHT, FontFaceEntry, FontSource},
    error::{ParseError, Result},
    registry::FontRegistry,
    scanner::{AnnotatedRule, Declaration, into_parse_error, scan},
};

type CssError<'i> = cssparser::ParseError<'i, ParseError>;

/// Font formats recognised from a URL extension when `format()` is absent.
const KNOWN_FORMATS: &[(&str, &str)] = &[
    ("woff2", "woff2"),
    ("woff", "woff"),
    ("ttf", "truetype"),
    ("otf", "opentype"),
    ("eot", "embedded-opentype"),
    ("svg", "svg"),
];

/// Parse a stylesheet into a font registry.
///
/// Every `@font-face` rule becomes one entry under its canonical key. Rules
/// that produce the same key replace earlier ones in place.
///
/// # Example
///
/// ```
/// let css = "/* latin */\n@font-face{font-family:'Roboto';font-style:normal;font-weight:100;\
///            src:url(https://x/a.woff2) format('woff2');unicode-range:U+0000-00FF;}";
/// let registry = font_face::parse(css).unwrap();
/// let entry = registry.get("roboto-latin-normal-100").unwrap();
/// assert_eq!(entry.source().url(), "https://x/a.woff2");
/// ```
pub fn parse(css: &str) -> Result<FontRegistry> {
    let mut registry = FontRegistry::new();

    for annotated in scan(css)? {
        let entry = entry_from_rule(&annotated)?;
        let key = entry.key();
        if registry.insert(entry).is_some() {
            debug!("{key}: later @font-face rule replaces an earlier one");
        }
    }

    debug!("parsed {} font faces", registry.len());
    Ok(registry)
}

/// Charset named by a rule annotation, `latin` when there is none.
pub fn charset_from_annotation(annotation: Option<&str>) -> &str {
    match annotation.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => DEFAULT_CHARSET,
    }
}

/// Build one entry from an annotated `@font-face` rule.
pub fn entry_from_rule(annotated: &AnnotatedRule) -> Result<FontFaceEntry> {
    let rule = &annotated.rule;
    let charset = charset_from_annotation(annotated.annotation.as_deref());

    let mut family = None;
    let mut style = None;
    let mut weight = None;
    let mut unicode_range = None;
    let mut src = None;

    for decl in &rule.declarations {
        let value = Some(decl.value.as_str()).filter(|v| !v.is_empty());
        match decl.name.as_str() {
            "font-family" => family = value,
            "font-style" => style = value,
            "font-weight" => weight = value,
            "unicode-range" => unicode_range = value,
            "src" => src = Some(decl),
            other => debug!(
                "ignoring @font-face descriptor `{other}` at line {}",
                decl.location.line + 1
            ),
        }
    }

    let family = family.ok_or_else(|| ParseError::missing(rule.location, "font-family"))?;
    let src = src.ok_or_else(|| ParseError::missing(rule.location, "src"))?;
    let source = parse_src(src)?;

    Ok(FontFaceEntry::new(
        charset,
        family,
        style.unwrap_or(DEFAULT_FONT_STYLE),
        weight.unwrap_or(DEFAULT_FONT_WEIGHT),
        unicode_range.unwrap_or_default(),
        source,
    ))
}

#[derive(Debug, Default)]
struct SrcParts {
    url: Option<String>,
    format: Option<String>,
}

/// Extract the first `url()` and the first `format()` from a `src` value.
///
/// The two need not be adjacent; later pairs of a fallback chain are ignored.
fn parse_src(decl: &Declaration) -> Result<FontSource> {
    let mut input = ParserInput::new(&decl.value);
    let mut parser = Parser::new(&mut input);
    let mut parts = SrcParts::default();
    walk_src(&mut parser, &mut parts).map_err(into_parse_error)?;

    let url = parts
        .url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ParseError::missing(decl.location, "url"))?;
    let format = match parts.format.filter(|f| !f.is_empty()) {
        Some(format) => format,
        None => format_from_url(&url)
            .ok_or_else(|| ParseError::missing(decl.location, "format"))?
            .to_string(),
    };

    Ok(FontSource::new(url, format))
}

fn walk_src<'i>(parser: &mut Parser<'i, '_>, parts: &mut SrcParts) -> std::result::Result<(), CssError<'i>> {
    loop {
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::UnquotedUrl(url) => {
                parts.url.get_or_insert_with(|| url.to_string());
            }
            Token::Function(name) if name.eq_ignore_ascii_case("url") => {
                let url = parser.parse_nested_block(|args| first_argument(args))?;
                if parts.url.is_none() {
                    parts.url = url;
                }
            }
            Token::Function(name) if name.eq_ignore_ascii_case("format") => {
                let format = parser.parse_nested_block(|args| first_argument(args))?;
                if parts.format.is_none() {
                    parts.format = format;
                }
            }
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                parser.parse_nested_block(|inner| walk_src(inner, parts))?;
            }
            _ => {}
        }
    }
    Ok(())
}

fn first_argument<'i>(args: &mut Parser<'i, '_>) -> std::result::Result<Option<String>, CssError<'i>> {
    Ok(match args.next() {
        Ok(Token::QuotedString(s) | Token::Ident(s) | Token::UnquotedUrl(s)) => Some(s.to_string()),
        _ => None,
    })
}

fn format_from_url(url: &str) -> Option<&'static str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let (_, extension) = path.rsplit_once('.')?;
    KNOWN_FORMATS
        .iter()
        .find(|(ext, _)| extension.eq_ignore_ascii_case(ext))
        .map(|(_, format)| *format)
}
