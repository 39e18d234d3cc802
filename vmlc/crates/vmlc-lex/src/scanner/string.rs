//! String literal scanning.
//!
//! This module handles double-quoted attribute values. There are no escape
//! sequences: a double quote always terminates the literal, so a quote
//! cannot appear inside one.

use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a string literal.
    ///
    /// Consumes the opening quote, takes the run up to (but not including)
    /// the next quote, then consumes the closing quote. An unterminated
    /// literal runs to end of input and the closing-quote skip becomes a
    /// no-op.
    pub(crate) fn scan_string(&mut self) {
        self.cursor.advance();
        let value = self.cursor.take_while(|c| c != '"');
        self.cursor.advance();
        self.emit(TokenKind::StringLiteral, value);
    }
}
