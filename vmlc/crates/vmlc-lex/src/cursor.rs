//! Character cursor for traversing a source character sequence.
//!
//! This module provides the `Cursor` struct which maintains the single
//! mutable position the scanner moves through the input. The input is a
//! pre-split character slice, so positions are character indices and every
//! advance moves exactly one character.

/// A cursor for traversing a character sequence left to right.
///
/// The cursor owns the only piece of mutable state in a scan: its position.
/// The position starts at 0, never exceeds the input length, and never moves
/// backwards. Lookahead is done with bounded peeks, never by materializing
/// a substring.
///
/// # Example
///
/// ```
/// use vmlc_lex::cursor::Cursor;
///
/// let source: Vec<char> = "<view>".chars().collect();
/// let mut cursor = Cursor::new(&source);
///
/// assert_eq!(cursor.current_char(), '<');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'v');
/// ```
pub struct Cursor<'a> {
    /// The character sequence being traversed.
    source: &'a [char],

    /// Current position, in characters.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor over the given character sequence.
    pub fn new(source: &'a [char]) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns `'\0'` (null character) if at the end of the input.
    ///
    /// # Example
    ///
    /// ```
    /// use vmlc_lex::cursor::Cursor;
    ///
    /// let source: Vec<char> = "ab".chars().collect();
    /// let cursor = Cursor::new(&source);
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` positions ahead of the cursor.
    ///
    /// Returns `'\0'` when the peek runs past the end of the input.
    ///
    /// # Example
    ///
    /// ```
    /// use vmlc_lex::cursor::Cursor;
    ///
    /// let source: Vec<char> = "ab".chars().collect();
    /// let cursor = Cursor::new(&source);
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(1), 'b');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.source
            .get(self.position + offset)
            .copied()
            .unwrap_or('\0')
    }

    /// Returns true if the next characters equal `marker`, in full.
    ///
    /// This is the bounded lookahead used for multi-character delimiters and
    /// comment markers. A marker that would run past the end of the input
    /// never matches, so a truncated `<!-` at end of input is not a comment
    /// opener.
    ///
    /// # Example
    ///
    /// ```
    /// use vmlc_lex::cursor::Cursor;
    ///
    /// let source: Vec<char> = "<!-- c -->".chars().collect();
    /// let cursor = Cursor::new(&source);
    /// assert!(cursor.matches("<!--"));
    /// assert!(!cursor.matches("-->"));
    /// ```
    pub fn matches(&self, marker: &str) -> bool {
        let mut offset = 0;
        for expected in marker.chars() {
            if self.position + offset >= self.source.len() {
                return false;
            }
            if self.source[self.position + offset] != expected {
                return false;
            }
            offset += 1;
        }
        true
    }

    /// Advances the cursor by one character.
    ///
    /// Does nothing if already at the end of the input.
    #[inline]
    pub fn advance(&mut self) {
        if self.position < self.source.len() {
            self.position += 1;
        }
    }

    /// Advances the cursor by up to `count` characters.
    ///
    /// # Example
    ///
    /// ```
    /// use vmlc_lex::cursor::Cursor;
    ///
    /// let source: Vec<char> = "abcdef".chars().collect();
    /// let mut cursor = Cursor::new(&source);
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.current_char(), 'd');
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        self.position = (self.position + count).min(self.source.len());
    }

    /// Consumes the maximal run of characters satisfying `pred` and returns
    /// it as an owned string.
    ///
    /// The cursor stops on the first character that fails the predicate (or
    /// at end of input), without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use vmlc_lex::cursor::Cursor;
    ///
    /// let source: Vec<char> = "abc>".chars().collect();
    /// let mut cursor = Cursor::new(&source);
    /// assert_eq!(cursor.take_while(|c| c != '>'), "abc");
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn take_while<F>(&mut self, pred: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let start = self.position;
        while self.position < self.source.len() && pred(self.source[self.position]) {
            self.position += 1;
        }
        self.source[start..self.position].iter().collect()
    }

    /// Skips the maximal run of characters satisfying `pred`.
    ///
    /// Like [`take_while`](Self::take_while) but discards the run.
    pub fn skip_while<F>(&mut self, pred: F)
    where
        F: Fn(char) -> bool,
    {
        while self.position < self.source.len() && pred(self.source[self.position]) {
            self.position += 1;
        }
    }

    /// Returns true if the cursor has consumed the whole input.
    ///
    /// # Example
    ///
    /// ```
    /// use vmlc_lex::cursor::Cursor;
    ///
    /// let source: Vec<char> = "a".chars().collect();
    /// let mut cursor = Cursor::new(&source);
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current position, in characters.
    pub fn position(&self) -> usize {
        self.position
    }
}
