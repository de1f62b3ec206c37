//! Read-only cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End of input is
//! detected when the current byte is the `0x00` sentinel — no explicit
//! bounds checking is needed in the common case. The cursor never rewinds
//! and never mutates the source bytes: a bounded substring is handed to
//! callers via [`slice`](Cursor::slice) instead of null-terminating in
//! place.

use memchr::{memchr, memmem};

/// Read-only cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap position snapshots.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, with at
/// least one more `0x00` byte after it. This is guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + two sentinel bytes).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinels).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position without consuming it.
    ///
    /// Returns `0x00` at end of input (the sentinel byte), never out of
    /// bounds.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call at any position: the double sentinel guarantees a valid
    /// read one past the end of the source content.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    ///
    /// Callers choose `n` consistent with the byte(s) just inspected.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes the sentinel).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` once the cursor has consumed all source content.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Borrow a source substring.
    ///
    /// `start..end` must fall within the source content; offsets come from
    /// the scanner's own position tracking.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Borrow a source substring from `start` to the current position.
    ///
    /// Equivalent to `self.slice(start, self.pos())`.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop.
    /// This holds for all byte-class predicates used by the tokenizer
    /// (letters, digits, whitespace).
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Skip a line comment body: advance through and including the next
    /// `\n`, or to end of input when the comment ends the file.
    ///
    /// Uses memchr for the newline search. Scans only within source
    /// content, never into the sentinel.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_line_comment(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr(b'\n', remaining) {
            self.pos += offset as u32 + 1;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Skip a block comment body: advance through and including the next
    /// `*/`.
    ///
    /// Returns `false` when no terminator exists before end of input; the
    /// cursor is then parked at the end of the source so no further bytes
    /// can be read.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_block_comment(&mut self) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memmem::find(remaining, b"*/") {
            self.pos += offset as u32 + 2;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }
}
