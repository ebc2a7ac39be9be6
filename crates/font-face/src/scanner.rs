//! Stylesheet scanning.
//!
//! Walks a stylesheet with `cssparser` and returns every `@font-face` rule
//! together with its annotation: the text of the comment that sits
//! immediately before the rule in the same scope. Whitespace does not count
//! as a node; any other rule or statement in between clears the annotation.

use cssparser::{ParseErrorKind, Parser, ParserInput, SourceLocation, Token};

use crate::error::{ParseError, Result};

type CssError<'i> = cssparser::ParseError<'i, ParseError>;
type CssResult<'i, T> = std::result::Result<T, CssError<'i>>;

/// Block at-rules whose bodies hold further rules.
const GROUPING_AT_RULES: &[&str] =
    &["media", "supports", "layer", "container", "document", "-moz-document", "scope"];

/// A single `name: value` declaration, value kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name.
    pub name: String,
    /// Raw value text, trimmed, without a trailing `!important`.
    pub value: String,
    pub location: SourceLocation,
}

/// Body of an `@font-face` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceRule {
    /// Position of the `@font-face` keyword.
    pub location: SourceLocation,
    pub declarations: Vec<Declaration>,
}

impl FontFaceRule {
    /// Last declaration named `name`.
    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().rev().find(|decl| decl.name == name)
    }
}

/// An `@font-face` rule paired with the comment that precedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRule {
    pub annotation: Option<String>,
    pub rule: FontFaceRule,
}

/// Scan `css` for `@font-face` rules, in source order.
pub fn scan(css: &str) -> Result<Vec<AnnotatedRule>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = Vec::new();
    scan_scope(&mut parser, &mut rules).map_err(into_parse_error)?;
    Ok(rules)
}

fn scan_scope<'i>(parser: &mut Parser<'i, '_>, rules: &mut Vec<AnnotatedRule>) -> CssResult<'i, ()> {
    let mut annotation: Option<String> = None;

    loop {
        let start = parser.position();
        let location = parser.current_source_location();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) | Token::CDO | Token::CDC => {}
            Token::Comment(text) => {
                if !parser.slice_from(start).ends_with("*/") {
                    return Err(syntax(location, "unterminated comment"));
                }
                annotation = Some(text.to_string());
            }
            Token::Semicolon => annotation = None,
            Token::AtKeyword(name) => {
                let annotation = annotation.take();
                if name.eq_ignore_ascii_case("font-face") {
                    let rule = font_face_rule(parser, location)?;
                    rules.push(AnnotatedRule { annotation, rule });
                } else {
                    let grouping = GROUPING_AT_RULES.iter().any(|g| name.eq_ignore_ascii_case(g));
                    other_at_rule(parser, location, grouping, rules)?;
                }
            }
            Token::CloseCurlyBracket | Token::CloseParenthesis | Token::CloseSquareBracket => {
                return Err(syntax(location, "unmatched closing bracket"));
            }
            Token::BadUrl(_) | Token::BadString(_) => {
                return Err(syntax(location, "invalid string or url"));
            }
            Token::CurlyBracketBlock => {
                annotation = None;
                skip_block(parser, location)?;
            }
            _ => {
                annotation = None;
                qualified_rule(parser, location)?;
            }
        }
    }

    Ok(())
}

fn font_face_rule<'i>(
    parser: &mut Parser<'i, '_>,
    location: SourceLocation,
) -> CssResult<'i, FontFaceRule> {
    match parser.next() {
        Ok(Token::CurlyBracketBlock) => {}
        _ => return Err(syntax(location, "expected `{` after @font-face")),
    }

    let declarations = nested_block(parser, location, |block| declaration_list(block))?;

    Ok(FontFaceRule { location, declarations })
}

/// Skip an at-rule other than `@font-face`, descending into grouping rules.
fn other_at_rule<'i>(
    parser: &mut Parser<'i, '_>,
    location: SourceLocation,
    grouping: bool,
    rules: &mut Vec<AnnotatedRule>,
) -> CssResult<'i, ()> {
    loop {
        match parser.next() {
            Err(_) | Ok(Token::Semicolon) => return Ok(()),
            Ok(Token::CurlyBracketBlock) => {
                if grouping {
                    return nested_block(parser, location, |block| scan_scope(block, rules));
                }
                return skip_block(parser, location);
            }
            Ok(Token::BadUrl(_) | Token::BadString(_)) => {
                return Err(syntax(location, "invalid string or url in at-rule prelude"));
            }
            Ok(_) => {}
        }
    }
}

/// Skip a style rule: the selector prelude and its declaration block.
fn qualified_rule<'i>(parser: &mut Parser<'i, '_>, location: SourceLocation) -> CssResult<'i, ()> {
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => return skip_block(parser, location),
            Ok(Token::BadUrl(_) | Token::BadString(_)) => {
                return Err(syntax(location, "invalid string or url in selector"));
            }
            Ok(_) => {}
            Err(_) => return Err(syntax(location, "expected `{` after selector")),
        }
    }
}

fn declaration_list<'i>(block: &mut Parser<'i, '_>) -> CssResult<'i, Vec<Declaration>> {
    let mut declarations = Vec::new();

    loop {
        let location = block.current_source_location();
        let token = match block.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) | Token::Comment(_) | Token::Semicolon => {}
            Token::Ident(name) => {
                block
                    .expect_colon()
                    .map_err(|_| syntax(location, format!("expected `:` after `{name}`")))?;
                let value = declaration_value(block, location)?;
                declarations.push(Declaration { name: name.to_ascii_lowercase(), value, location });
            }
            _ => return Err(syntax(location, "expected a descriptor name")),
        }
    }

    Ok(declarations)
}

fn declaration_value<'i>(block: &mut Parser<'i, '_>, location: SourceLocation) -> CssResult<'i, String> {
    let start = block.position();
    let mut end = start;

    loop {
        match block.next_including_whitespace_and_comments() {
            Err(_) | Ok(Token::Semicolon) => break,
            Ok(Token::BadUrl(_) | Token::BadString(_)) => {
                return Err(syntax(location, "invalid string or url in value"));
            }
            Ok(
                Token::Function(_)
                | Token::ParenthesisBlock
                | Token::SquareBracketBlock
                | Token::CurlyBracketBlock,
            ) => {
                block.parse_nested_block(|inner| {
                    while inner.next_including_whitespace_and_comments().is_ok() {}
                    Ok::<_, CssError<'i>>(())
                })?;
                end = block.position();
            }
            Ok(_) => end = block.position(),
        }
    }

    let value = block.slice(start..end).trim();
    let value = value.strip_suffix("!important").map_or(value, str::trim_end);
    Ok(value.to_string())
}

fn skip_block<'i>(parser: &mut Parser<'i, '_>, location: SourceLocation) -> CssResult<'i, ()> {
    nested_block(parser, location, |_| Ok(()))
}

/// Parse the block just opened with `parse`, then drain what it left.
///
/// cssparser closes blocks silently at end of input; a block only counts as
/// closed when a `}` follows its contents.
fn nested_block<'i, T>(
    parser: &mut Parser<'i, '_>,
    location: SourceLocation,
    parse: impl for<'tt> FnOnce(&mut Parser<'i, 'tt>) -> CssResult<'i, T>,
) -> CssResult<'i, T> {
    let mut end = parser.position();
    let value = parser.parse_nested_block(|block| {
        let value = parse(block)?;
        while block.next_including_whitespace_and_comments().is_ok() {}
        end = block.position();
        Ok(value)
    })?;

    if parser.slice(end..parser.position()).starts_with('}') {
        Ok(value)
    } else {
        Err(syntax(location, "unterminated block"))
    }
}

fn syntax<'i>(location: SourceLocation, reason: impl Into<String>) -> CssError<'i> {
    CssError { kind: ParseErrorKind::Custom(ParseError::syntax(location, reason)), location }
}

pub(crate) fn into_parse_error(err: CssError<'_>) -> ParseError {
    match err.kind {
        ParseErrorKind::Custom(err) => err,
        ParseErrorKind::Basic(kind) => ParseError::syntax(err.location, format!("{kind:?}")),
    }
}
