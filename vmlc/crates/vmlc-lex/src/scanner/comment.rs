//! Comment scanning.
//!
//! This module handles `<!-- ... -->` comments. Unlike most scanners, the
//! comment interior is kept and emitted as a token so downstream tooling can
//! surface it.

use crate::scanner::core::{COMMENT_CLOSE, COMMENT_OPEN};
use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a comment.
    ///
    /// The caller has already checked the 4-character open marker. Consumes
    /// the interior up to (but not including) the close marker, emits it
    /// untrimmed as a `Comment` token, then skips the close marker. An
    /// unterminated comment runs to end of input and the close-marker skip
    /// becomes a no-op.
    pub(crate) fn scan_comment(&mut self) {
        self.cursor.advance_n(COMMENT_OPEN.len());

        let mut value = String::new();
        while !self.cursor.is_at_end() && !self.cursor.matches(COMMENT_CLOSE) {
            value.push(self.cursor.current_char());
            self.cursor.advance();
        }
        self.cursor.advance_n(COMMENT_CLOSE.len());

        self.emit(TokenKind::Comment, value);
    }
}
