//! Byte cursor over the source text.
//!
//! The cursor only ever stops on ASCII bytes or on the first byte of a
//! UTF-8 sequence, so every position it reports is a valid `str` boundary.

/// Cursor over a source string.
///
/// [`Copy`] so the scanner can snapshot and restore it for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// The caller guarantees `source.len() <= u32::MAX`.
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    fn bytes(&self) -> &'a [u8] {
        self.source.as_bytes()
    }

    /// Byte at the current position, `0` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(0)
    }

    /// Byte one past the current position, `0` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(1)
    }

    /// Byte two past the current position, `0` past EOF.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(2)
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> u8 {
        self.bytes()
            .get(self.pos as usize + offset)
            .copied()
            .unwrap_or(0)
    }

    /// The character at the current position (handles multi-byte UTF-8).
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// Remaining source from the current position.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.source.get(self.pos as usize..).unwrap_or_default()
    }

    /// Advance by one byte. Only valid on ASCII.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance by `n` bytes, clamped to EOF.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length is checked to fit in u32 before lexing"
    )]
    pub fn advance_n(&mut self, n: usize) {
        let target = (self.pos as usize + n).min(self.source.len());
        self.pos = target as u32;
    }

    /// Advance past the current character, whatever its UTF-8 width.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        self.advance_n(width);
    }

    /// Advance while `pred` holds for the current ASCII byte.
    #[inline]
    pub fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Jump to the next occurrence of `needle`, or to EOF if there is none.
    ///
    /// Returns whether the needle was found.
    pub fn skip_to_byte(&mut self, needle: u8) -> bool {
        match memchr::memchr(needle, self.rest().as_bytes()) {
            Some(offset) => {
                self.advance_n(offset);
                true
            }
            None => {
                self.advance_n(self.rest().len());
                false
            }
        }
    }

    /// Jump past the next occurrence of `needle`, or to EOF.
    ///
    /// Returns whether the needle was found.
    pub fn skip_past(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.rest().as_bytes(), needle) {
            Some(offset) => {
                self.advance_n(offset + needle.len());
                true
            }
            None => {
                self.advance_n(self.rest().len());
                false
            }
        }
    }

    /// Source text between `start` and the current position.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.source
            .get(start as usize..self.pos as usize)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
