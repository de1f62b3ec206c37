//! Append-only storage for decoded token text.
//!
//! Identifier spellings and unescaped string contents live here for the
//! duration of one statement. Tokens hold [`TextHandle`] values — offset
//! and length pairs — rather than references into the arena, so the arena
//! may grow (and reallocate) freely while tokens are alive. A handle is
//! resolved against the arena at read time.

/// Handle to a byte range inside a [`TextArena`].
///
/// Stable across arena growth: it stores an offset, not an address. A
/// handle is only meaningful for the arena that produced it, and only
/// until that arena's next [`clear`](TextArena::clear).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextHandle {
    offset: u32,
    len: u32,
}

impl TextHandle {
    /// Length of the referenced text in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` for a handle to empty text (e.g. `""`).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Append-only buffer for decoded token text.
///
/// The tokenizer writes identifier spellings and unescaped string bodies
/// here; the driver clears the arena between statements so memory is
/// reused rather than reallocated per token.
#[derive(Debug, Default)]
pub struct TextArena {
    buf: Vec<u8>,
}

impl TextArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Current write position. Pass the returned mark to
    /// [`handle_from`](Self::handle_from) once the text is complete.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "arena text is bounded by source length which fits in u32"
    )]
    pub fn mark(&self) -> u32 {
        self.buf.len() as u32
    }

    /// Append a single decoded byte.
    pub fn push(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Append a run of bytes verbatim, returning a handle to them.
    pub fn append(&mut self, bytes: &[u8]) -> TextHandle {
        let mark = self.mark();
        self.buf.extend_from_slice(bytes);
        self.handle_from(mark)
    }

    /// Produce a handle for everything written since `mark`.
    pub fn handle_from(&self, mark: u32) -> TextHandle {
        debug_assert!(
            (mark as usize) <= self.buf.len(),
            "mark {mark} exceeds arena length {}",
            self.buf.len()
        );
        TextHandle {
            offset: mark,
            len: self.mark() - mark,
        }
    }

    /// Read the text a handle refers to.
    ///
    /// The handle must come from this arena and predate its last
    /// [`clear`](Self::clear); the debug assertion catches stale handles.
    pub fn resolve(&self, handle: TextHandle) -> &[u8] {
        let start = handle.offset as usize;
        let end = start + handle.len as usize;
        debug_assert!(
            end <= self.buf.len(),
            "handle {handle:?} is stale for arena of length {}",
            self.buf.len()
        );
        &self.buf[start..end]
    }

    /// Discard all text. Outstanding handles become stale; capacity is
    /// retained for the next statement.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Bytes currently stored.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "arena text is bounded by source length which fits in u32"
    )]
    pub fn len(&self) -> u32 {
        self.buf.len() as u32
    }

    /// Returns `true` if no text is stored.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_and_resolve() {
        let mut arena = TextArena::new();
        let mark = arena.mark();
        arena.push(b'h');
        arena.push(b'i');
        let handle = arena.handle_from(mark);
        assert_eq!(arena.resolve(handle), b"hi");
        assert_eq!(handle.len(), 2);
    }

    #[test]
    fn append_slice() {
        let mut arena = TextArena::new();
        let handle = arena.append(b"greet");
        assert_eq!(arena.resolve(handle), b"greet");
    }

    #[test]
    fn interleaved_handles_stay_distinct() {
        let mut arena = TextArena::new();
        let h1 = arena.append(b"print");
        let h2 = arena.append(b"hello world");

        assert_eq!(arena.resolve(h1), b"print");
        assert_eq!(arena.resolve(h2), b"hello world");
    }

    #[test]
    fn handles_survive_arena_growth() {
        let mut arena = TextArena::new();
        let handle = arena.append(b"first");

        // Force reallocation well past any initial capacity.
        for _ in 0..64 {
            arena.append(b"0123456789abcdef0123456789abcdef");
        }

        assert_eq!(arena.resolve(handle), b"first");
    }

    #[test]
    fn empty_handle() {
        let mut arena = TextArena::new();
        arena.append(b"xyz");
        let mark = arena.mark();
        let handle = arena.handle_from(mark);
        assert!(handle.is_empty());
        assert_eq!(arena.resolve(handle), b"");
    }

    #[test]
    fn clear_resets_length_and_reuses_storage() {
        let mut arena = TextArena::new();
        arena.append(b"statement one");
        assert_eq!(arena.len(), 13);

        arena.clear();
        assert!(arena.is_empty());

        let mark = arena.mark();
        assert_eq!(mark, 0);
        arena.append(b"two");
        let handle = arena.handle_from(mark);
        assert_eq!(arena.resolve(handle), b"two");
    }
}
