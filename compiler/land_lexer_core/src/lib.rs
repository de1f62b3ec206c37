//! Low-level scanning primitives for the Land front end.
//!
//! This crate is standalone — it knows nothing about tokens, keywords, or
//! statements. It provides the three memory-shaped pieces the tokenizer is
//! built on:
//!
//! - [`SourceBuffer`]: an owned, sentinel-terminated copy of one file's bytes.
//! - [`Cursor`]: a read-only, copyable walk over that buffer.
//! - [`TextArena`]: an append-only buffer holding decoded text (identifier
//!   spellings, unescaped string contents) for the duration of one statement,
//!   handed out as [`TextHandle`] values resolved at read time.
//!
//! [`Span`] is the shared byte-range type carried by tokens and errors.

mod cursor;
mod source_buffer;
mod span;
mod text_arena;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use text_arena::{TextArena, TextHandle};
