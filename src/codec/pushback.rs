//! Pushback cursor for speculative multi-character reads.

/// Single-checkpoint scanner over a borrowed string.
///
/// Decoders call [`mark`](Self::mark) before reading ahead and
/// [`reset`](Self::reset) when the lookahead does not form an escape, so a
/// failed attempt leaves the cursor where it started.
///
/// # Examples
///
/// ```
/// use sql_string_codec::codec::PushbackCursor;
///
/// let mut cursor = PushbackCursor::new("ab");
/// cursor.mark();
/// assert_eq!(cursor.next(), Some('a'));
/// cursor.reset();
/// assert_eq!(cursor.next(), Some('a'));
/// ```
#[derive(Debug, Clone)]
pub struct PushbackCursor<'a> {
    input: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    mark: Option<usize>,
}

impl<'a> PushbackCursor<'a> {
    /// Create a cursor positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            mark: None,
        }
    }

    /// Record the current position as the checkpoint, replacing any earlier one.
    pub fn mark(&mut self) {
        self.mark = Some(self.pos);
    }

    /// Rewind to the last checkpoint.
    ///
    /// # Panics
    ///
    /// Panics if [`mark`](Self::mark) was never called on this cursor.
    pub fn reset(&mut self) {
        match self.mark {
            Some(mark) => self.pos = mark,
            None => panic!("PushbackCursor::reset called without a prior mark"),
        }
    }

    /// Whether [`next`](Self::next) would return a character.
    pub fn has_next(&self) -> bool {
        self.pos < self.input.len()
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread tail of the input.
    pub fn remainder(&self) -> &'a str {
        &self.input[self.pos..]
    }
}

impl Iterator for PushbackCursor<'_> {
    type Item = char;

    /// Read one character and advance past it. At end of input the position
    /// does not move.
    fn next(&mut self) -> Option<char> {
        let c = self.remainder().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }
}
