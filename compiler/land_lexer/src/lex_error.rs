//! Lexical error types.
//!
//! Every error carries a [`Span`] locating it in the source and a kind
//! describing what went wrong. All lexical errors are fatal for the file
//! being scanned: the tokenizer returns `Err` and the driver stops pulling
//! tokens from that file.

use std::fmt;

use land_lexer_core::Span;

/// A lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// `/*` with no matching `*/` before end of input.
    UnterminatedComment,
    /// Missing closing `"` before end of input (including end of input
    /// immediately after a backslash).
    UnterminatedString,
    /// Unrecognized escape in a string literal (e.g. `\q`).
    InvalidEscape { escape: u8 },
    /// Integer literal exceeds the 32-bit signed range.
    IntOverflow,
    /// Empty digit sequence handed to the numeric parser.
    MalformedNumber,
}

impl LexError {
    /// Create an unterminated block comment error.
    #[cold]
    pub fn unterminated_comment(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedComment,
        }
    }

    /// Create an unterminated string error.
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    /// Create an invalid escape error.
    #[cold]
    pub fn invalid_escape(span: Span, escape: u8) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidEscape { escape },
        }
    }

    /// Create an integer overflow error.
    #[cold]
    pub fn int_overflow(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::IntOverflow,
        }
    }

    /// Create a malformed number error.
    #[cold]
    pub fn malformed_number(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::MalformedNumber,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnterminatedComment => {
                write!(f, "unterminated block comment (missing `*/`)")
            }
            LexErrorKind::UnterminatedString => {
                write!(f, "unterminated string literal (missing closing `\"`)")
            }
            LexErrorKind::InvalidEscape { escape } => {
                if escape.is_ascii_graphic() {
                    write!(f, "invalid escape sequence `\\{}`", *escape as char)
                } else {
                    write!(f, "invalid escape sequence `\\x{escape:02x}`")
                }
            }
            LexErrorKind::IntOverflow => {
                write!(
                    f,
                    "integer literal out of range (maximum is {})",
                    i32::MAX
                )
            }
            LexErrorKind::MalformedNumber => write!(f, "malformed integer literal"),
        }
    }
}

impl std::error::Error for LexError {}
