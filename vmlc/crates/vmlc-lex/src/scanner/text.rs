//! Closing delimiter and free-text scanning.
//!
//! A `>` both closes a tag and opens the only position where free text can
//! occur, so the two are scanned together: emit the delimiter, then capture
//! the raw run up to the next `<`.

use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a closing `>` and the trailing text run.
    ///
    /// The text run is captured verbatim, interior whitespace and newlines
    /// included. An empty run emits nothing; a whitespace-only run is
    /// emitted here and removed by the post-pass filter, which keeps this
    /// rule free of trimming decisions.
    pub(crate) fn scan_tag_close(&mut self) {
        self.cursor.advance();
        self.emit(TokenKind::Delimiter, ">".to_string());

        let value = self.cursor.take_while(|c| c != '<');
        if !value.is_empty() {
            self.emit(TokenKind::Text, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{scan_str, Token, TokenKind};

    #[test]
    fn test_text_after_close() {
        let tokens = scan_str("<a>Hello World!</a>");
        assert_eq!(tokens[3], Token::text("Hello World!"));
    }

    #[test]
    fn test_text_keeps_interior_whitespace_and_newlines() {
        let tokens = scan_str("<a>\n  Text Node\n  </a>");
        assert_eq!(tokens[3], Token::text("\n  Text Node\n  "));
    }

    #[test]
    fn test_no_text_token_between_adjacent_tags() {
        let tokens = scan_str("<a></a>");
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Text));
    }

    #[test]
    fn test_text_stops_at_next_open() {
        let tokens = scan_str("<a>one<b>two</b>");
        assert_eq!(tokens[3], Token::text("one"));
        assert_eq!(tokens[7], Token::text("two"));
    }

    #[test]
    fn test_unterminated_text_runs_to_eof() {
        let tokens = scan_str("<a>dangling");
        assert_eq!(tokens.last(), Some(&Token::text("dangling")));
    }

    #[test]
    fn test_text_may_contain_quotes_and_equals() {
        // Inside a text run the other rules never apply.
        let tokens = scan_str("<a>x = \"y\"</a>");
        assert_eq!(tokens[3], Token::text("x = \"y\""));
    }
}
