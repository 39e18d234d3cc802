//! Delimiter scanning.
//!
//! This module handles the fixed delimiter sets. Two-character delimiters
//! are checked before single-character ones, and `>` has its own rule in
//! `text` because it also opens a free-text run.

use crate::scanner::core::DOUBLE_DELIMITERS;
use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a two-character delimiter (`</` or `/>`) if one is next.
    ///
    /// Returns true if a delimiter was consumed and emitted. Must be tried
    /// before the single-character set so `</` never decomposes into `<`.
    pub(crate) fn scan_double_delimiter(&mut self) -> bool {
        for delimiter in DOUBLE_DELIMITERS {
            if self.cursor.matches(delimiter) {
                self.cursor.advance_n(delimiter.len());
                self.emit(TokenKind::Delimiter, delimiter.to_string());
                return true;
            }
        }
        false
    }
}
