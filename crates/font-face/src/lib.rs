//! Parse `@font-face` rules into a deduplicated font registry.
//!
//! The parser reads the comment directly before each `@font-face` rule as
//! the rule's charset (subset) label, the convention used by Google Fonts
//! CSS responses:
//!
//! ```css
//! /* latin-ext */
//! @font-face {
//!   font-family: 'Roboto';
//!   ...
//! }
//! ```
//!
//! Entries are keyed by [`FontKey`], derived from family, charset, style and
//! weight. Selections are subsets of a registry and share its type.

mod entry;
mod error;
mod key;
mod parser;
mod registry;
mod scanner;

pub use entry::{DEFAULT_CHARSET, DEFAULT_FONT_STYLE, DEFAULT_FONT_WEIGHT, FontFaceEntry, FontSource};
pub use error::{EmptySelection, ParseError, Result, UnknownKey};
pub use key::FontKey;
pub use parser::{charset_from_annotation, entry_from_rule, parse};
pub use registry::FontRegistry;
pub use scanner::{AnnotatedRule, Declaration, FontFaceRule, scan};
