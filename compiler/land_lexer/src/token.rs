//! Token model for the Land scanner.

use land_lexer_core::{Span, TextHandle};

/// A single lexical token: what it is plus where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Byte range in the source file.
    pub span: Span,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of a token.
///
/// Text-bearing kinds (`Ident`, `Str`) carry a
/// [`TextHandle`] into the statement's `TextArena`; the handle is valid
/// until the arena is cleared at the statement boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input. Terminal: once produced, every later call produces it
    /// again.
    Eof,
    /// A reserved word (`int`, `return`).
    Keyword(Keyword),
    /// An identifier; the handle resolves to its spelling.
    Ident(TextHandle),
    /// A decimal integer literal, already parsed.
    Int(i32),
    /// A string literal; the handle resolves to the *decoded* body
    /// (escapes already processed, no surrounding quotes).
    Str(TextHandle),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
}

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    /// `int`
    Int,
    /// `return`
    Return,
}
