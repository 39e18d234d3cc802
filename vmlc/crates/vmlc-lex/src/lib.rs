//! vmlc-lex - Lexical Scanner for VML Markup Documents
//!
//! This crate provides the scanner (tokenizer) for VML, a small markup
//! language of tags, attributes, string literals, comments and free text.
//! It transforms a raw character sequence into a flat, ordered sequence of
//! classified tokens that the parser consumes to build a tree.
//!
//! # Overview
//!
//! Scanning is a single left-to-right pass with bounded lookahead (at most
//! 4 characters, for the `<!--` comment marker). The scanner never fails:
//! malformed input degrades to whatever the maximal-run rules accumulate,
//! and characters matching no rule are silently dropped. Well-formedness
//! (balanced tags, duplicate attributes) is the parser's concern, not ours.
//!
//! # Example Usage
//!
//! ```
//! use vmlc_lex::{scan_str, Token, TokenKind};
//!
//! let tokens = scan_str(r#"<view id="root">Hi</view>"#);
//!
//! assert_eq!(tokens[0], Token::delimiter("<"));
//! assert_eq!(tokens[1], Token::identifier("view"));
//!
//! // The kind set is closed, so consumers can match exhaustively.
//! for token in &tokens {
//!     match token.kind {
//!         TokenKind::Comment
//!         | TokenKind::Delimiter
//!         | TokenKind::Identifier
//!         | TokenKind::StringLiteral
//!         | TokenKind::Text => {}
//!     }
//! }
//! ```
//!
//! The primary entry point takes a pre-split character sequence, which lets
//! callers feed the scanner from any character source:
//!
//! ```
//! use vmlc_lex::scan;
//!
//! let source: Vec<char> = "<br/>".chars().collect();
//! let tokens = scan(&source);
//! assert_eq!(tokens.len(), 3);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and kind definitions
//! - [`scanner`] - Main scanner implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classification for names and whitespace
//!
//! # Token Kinds
//!
//! The scanner produces five kinds of token:
//!
//! - **Comment** - the interior of `<!-- ... -->`, untrimmed
//! - **Delimiter** - one of `<`, `=`, `</`, `/>`, `>`
//! - **Identifier** - a tag or attribute name (`[A-Za-z][A-Za-z0-9_:-]*`)
//! - **StringLiteral** - the interior of a double-quoted value, no escapes
//! - **Text** - a free-text run between a closing `>` and the next `<`;
//!   whitespace-only runs are removed in a post-pass

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
mod edge_cases;
pub mod scanner;
pub mod token;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use scanner::{scan, scan_str, Scanner};
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_template_document() {
        let source = r#"
      <!-- This is a comment -->
      <view id="root">
        Text Node
        <text style="font-size: 16px;">Hello World!</text>
        <text hidden>ok</text>
      <view>
      <!-- End -->
    "#;
        let tokens = scan_str(source);
        let expected = vec![
            Token::comment(" This is a comment "),
            Token::delimiter("<"),
            Token::identifier("view"),
            Token::identifier("id"),
            Token::delimiter("="),
            Token::string_literal("root"),
            Token::delimiter(">"),
            Token::text("\n        Text Node\n        "),
            Token::delimiter("<"),
            Token::identifier("text"),
            Token::identifier("style"),
            Token::delimiter("="),
            Token::string_literal("font-size: 16px;"),
            Token::delimiter(">"),
            Token::text("Hello World!"),
            Token::delimiter("</"),
            Token::identifier("text"),
            Token::delimiter(">"),
            Token::delimiter("<"),
            Token::identifier("text"),
            Token::identifier("hidden"),
            Token::delimiter(">"),
            Token::text("ok"),
            Token::delimiter("</"),
            Token::identifier("text"),
            Token::delimiter(">"),
            Token::delimiter("<"),
            Token::identifier("view"),
            Token::delimiter(">"),
            Token::comment(" End "),
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_scan_and_scan_str_agree() {
        let source = r#"<a b="c">d</a>"#;
        let chars: Vec<char> = source.chars().collect();
        assert_eq!(scan(&chars), scan_str(source));
    }

    #[test]
    fn test_scan_is_repeatable() {
        let source = "<view>Text</view><!-- c -->";
        assert_eq!(scan_str(source), scan_str(source));
    }

    #[test]
    fn test_token_sequence_is_consumer_iterable() {
        let tokens = scan_str("<a>x</a>");
        let mut delimiters = 0;
        for token in &tokens {
            if token.kind == TokenKind::Delimiter {
                delimiters += 1;
            }
        }
        assert_eq!(delimiters, 4);
    }
}
