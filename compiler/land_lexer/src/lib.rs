//! Tokenizer for the Land front end.
//!
//! One token per [`Tokenizer::next_token`] call, scanning a
//! sentinel-terminated [`SourceBuffer`](land_lexer_core::SourceBuffer).
//! Decoded text (identifier spellings, unescaped string bodies) is interned
//! into a caller-owned [`TextArena`](land_lexer_core::TextArena); tokens
//! carry handles, not owned strings.
//!
//! Lexical errors are fatal for the file being scanned: `next_token`
//! returns `Result`, and the caller stops on the first `Err`.

mod keywords;
mod lex_error;
mod parse_helpers;
mod scanner;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::{tokenize, Tokenizer};
pub use token::{Keyword, Token, TokenKind};
