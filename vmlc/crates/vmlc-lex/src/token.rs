//! Token type definitions.
//!
//! This module defines the `Token` value produced by the scanner and the
//! closed set of `TokenKind`s a consumer can match over.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a scanned token.
///
/// This is a closed set: the parser is expected to match over it
/// exhaustively, so no variants will be added without a breaking release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// The interior of a `<!-- ... -->` comment, untrimmed.
    Comment,

    /// One of the markup delimiters: `<`, `=`, `</`, `/>`, `>`.
    Delimiter,

    /// A tag or attribute name.
    Identifier,

    /// The interior of a double-quoted attribute value.
    StringLiteral,

    /// A free-text run between a closing `>` and the next `<`.
    Text,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Comment => "comment",
            TokenKind::Delimiter => "delimiter",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string",
            TokenKind::Text => "text",
        };
        write!(f, "{}", name)
    }
}

/// A single unit of lexical output.
///
/// Tokens are immutable values: created once by the scanner and handed to
/// the caller in an ordered sequence. The `value` holds the exact source
/// characters the token covers (delimiters included), except that comment
/// and string tokens carry only their interior, without the markers.
///
/// # Example
///
/// ```
/// use vmlc_lex::{Token, TokenKind};
///
/// let token = Token::identifier("view");
/// assert_eq!(token.kind, TokenKind::Identifier);
/// assert_eq!(token.value, "view");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Classification of this token.
    pub kind: TokenKind,

    /// The text payload. May be empty for string literals (`""`), never
    /// empty-after-trim for text tokens once the scan has finished.
    pub value: String,
}

impl Token {
    /// Creates a token of the given kind.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Creates a `Comment` token.
    pub fn comment(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Comment, value)
    }

    /// Creates a `Delimiter` token.
    pub fn delimiter(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Delimiter, value)
    }

    /// Creates an `Identifier` token.
    pub fn identifier(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, value)
    }

    /// Creates a `StringLiteral` token.
    pub fn string_literal(value: impl Into<String>) -> Self {
        Self::new(TokenKind::StringLiteral, value)
    }

    /// Creates a `Text` token.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Text, value)
    }

    /// Returns true for a `Text` token whose value trims to nothing.
    ///
    /// The scanner captures raw inter-tag runs unconditionally, then drops
    /// the purely-whitespace ones in a post-pass so that formatting between
    /// tags does not surface as text nodes. Other kinds are never blank in
    /// this sense, even with an empty value.
    pub fn is_blank_text(&self) -> bool {
        self.kind == TokenKind::Text && self.value.trim().is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
