//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` byte after the source content, so the
//! scanner detects end of input by reading the current byte — no separate
//! bounds check on the hot path. Interior null bytes are not distinguished
//! from the sentinel: the scanning contract is "null-terminated buffer", and
//! a `0x00` byte ends the scan wherever it appears.

use crate::Cursor;

/// Owned, sentinel-terminated copy of one source file's bytes.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00]
///  ^                ^
///  0            source_len (sentinel)
/// ```
///
/// Two sentinel bytes are appended so [`Cursor::peek()`] stays in bounds
/// even when the cursor sits on the last source byte.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00, 0x00]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes the sentinel bytes).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from raw source bytes.
    ///
    /// Offsets are `u32`; sources larger than 4 GiB saturate `source_len`
    /// and only their first `u32::MAX` bytes are scanned.
    pub fn new(source: &[u8]) -> Self {
        let mut buf = Vec::with_capacity(source.len() + 2);
        buf.extend_from_slice(source);
        buf.push(0);
        buf.push(0);

        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);

        Self { buf, source_len }
    }

    /// The source bytes (without the sentinel).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes the sentinel).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
