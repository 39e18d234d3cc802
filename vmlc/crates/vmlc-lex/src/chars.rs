//! Character classification for markup scanning.
//!
//! These predicates define the character classes the scanner dispatches on.
//! Names are deliberately restricted to ASCII; everything else falls through
//! to the free-text and silent-drop rules.

/// Returns true for whitespace between tokens.
///
/// Uses the full Unicode white space class, so non-breaking spaces and
/// similar characters separate tokens the same way ASCII blanks do.
#[inline]
pub fn is_markup_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Returns true if `c` can start a tag or attribute name.
///
/// # Example
///
/// ```
/// use vmlc_lex::chars::is_name_start;
///
/// assert!(is_name_start('v'));
/// assert!(is_name_start('X'));
/// assert!(!is_name_start('1'));
/// assert!(!is_name_start('-'));
/// ```
#[inline]
pub fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true if `c` can continue a tag or attribute name.
///
/// Besides letters and digits this admits `_`, `-` and `:`, which covers
/// kebab-case attributes (`font-size`) and namespaced names (`on:click`).
///
/// # Example
///
/// ```
/// use vmlc_lex::chars::is_name_continue;
///
/// assert!(is_name_continue('a'));
/// assert!(is_name_continue('9'));
/// assert!(is_name_continue('-'));
/// assert!(is_name_continue(':'));
/// assert!(!is_name_continue('>'));
/// ```
#[inline]
pub fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == ':'
}
