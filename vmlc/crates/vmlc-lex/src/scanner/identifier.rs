//! Identifier scanning.
//!
//! This module handles tag and attribute names.

use crate::chars::is_name_continue;
use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier.
    ///
    /// The caller has already checked that the current character is an
    /// ASCII letter. Consumes the maximal run of name characters (letters,
    /// digits, `_`, `-`, `:`) and emits it as an `Identifier` token.
    pub(crate) fn scan_identifier(&mut self) {
        let value = self.cursor.take_while(is_name_continue);
        self.emit(TokenKind::Identifier, value);
    }
}
