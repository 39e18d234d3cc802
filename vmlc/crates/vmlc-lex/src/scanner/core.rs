//! Core scanner implementation.
//!
//! This module contains the main Scanner struct and its dispatch loop.

use crate::chars::{is_markup_whitespace, is_name_start};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Comment open marker, checked with 4 characters of lookahead.
pub(crate) const COMMENT_OPEN: &str = "<!--";

/// Comment close marker, checked with 3 characters of lookahead.
pub(crate) const COMMENT_CLOSE: &str = "-->";

/// Two-character delimiters, checked before the single-character set.
pub(crate) const DOUBLE_DELIMITERS: [&str; 2] = ["</", "/>"];

/// Single-character delimiters. `>` is not listed here because it has its
/// own rule that also captures the trailing text run.
pub(crate) const SINGLE_DELIMITERS: [char; 2] = ['<', '='];

/// Scanner for VML markup documents.
///
/// The scanner walks the character sequence once, left to right, emitting
/// tokens into an output vector. Rules are tried in a fixed order and the
/// first match wins; that order is what disambiguates `<` from `<!--` and
/// `</`. Characters matching no rule are consumed without emission, so a
/// scan never fails.
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'a>,

    /// Tokens emitted so far, in source order.
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given character sequence.
    pub fn new(source: &'a [char]) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Runs the scan to completion and returns the token sequence.
    ///
    /// After the main loop a post-pass removes every text token whose value
    /// trims to nothing. The capture rule takes raw inter-tag runs so that
    /// meaningful text keeps its exact spelling; the post-pass is what keeps
    /// pure formatting whitespace out of the output.
    pub fn run(mut self) -> Vec<Token> {
        while !self.cursor.is_at_end() {
            self.scan_token();
        }

        self.tokens.retain(|token| !token.is_blank_text());
        self.tokens
    }

    /// Scans a single dispatch step.
    ///
    /// Each step consumes at least one character, which bounds the whole
    /// scan at one dispatch per input position.
    fn scan_token(&mut self) {
        let c = self.cursor.current_char();

        if is_markup_whitespace(c) {
            self.cursor.advance();
            self.cursor.skip_while(is_markup_whitespace);
        } else if self.cursor.matches(COMMENT_OPEN) {
            self.scan_comment();
        } else if c == '"' {
            self.scan_string();
        } else if c == '>' {
            self.scan_tag_close();
        } else if self.scan_double_delimiter() {
            // token already emitted
        } else if SINGLE_DELIMITERS.contains(&c) {
            self.cursor.advance();
            self.emit(TokenKind::Delimiter, c.to_string());
        } else if is_name_start(c) {
            self.scan_identifier();
        } else {
            // No rule matched. Drop the character, but still advance so the
            // loop terminates.
            self.cursor.advance();
        }
    }

    /// Appends a token to the output sequence.
    pub(crate) fn emit(&mut self, kind: TokenKind, value: String) {
        self.tokens.push(Token::new(kind, value));
    }
}

/// Scans a character sequence into its token sequence.
///
/// This is the main entry point for tokenization. It never fails: malformed
/// input degrades to whatever tokens the maximal-run rules accumulate before
/// end of input, and unrecognized characters are dropped.
///
/// # Example
///
/// ```
/// use vmlc_lex::{scan, Token};
///
/// let source: Vec<char> = "<view>".chars().collect();
/// let tokens = scan(&source);
/// assert_eq!(
///     tokens,
///     vec![
///         Token::delimiter("<"),
///         Token::identifier("view"),
///         Token::delimiter(">"),
///     ]
/// );
/// ```
pub fn scan(source: &[char]) -> Vec<Token> {
    Scanner::new(source).run()
}

/// Scans a string slice, splitting it into characters first.
///
/// Convenience wrapper over [`scan`] for callers holding ordinary string
/// data rather than a pre-split character sequence.
pub fn scan_str(source: &str) -> Vec<Token> {
    let chars: Vec<char> = source.chars().collect();
    scan(&chars)
}
