//! Keyword resolution.
//!
//! The lookup uses the candidate's length as a first-pass filter, then an
//! exact full-length compare within the bucket. A keyword match requires
//! the *entire* identifier to equal the keyword spelling: `integer` is an
//! identifier, not `int` plus trailing bytes.
//!
//! Adding a keyword means adding a bucket arm here and a [`Keyword`]
//! variant — no scanning rule changes.

use crate::token::Keyword;

/// Look up a reserved word by its full spelling.
///
/// Returns `None` for regular identifiers. Case-sensitive; `Int` and
/// `RETURN` are identifiers.
#[inline]
pub(crate) fn lookup(text: &[u8]) -> Option<Keyword> {
    match text.len() {
        3 => match text {
            b"int" => Some(Keyword::Int),
            _ => None,
        },
        6 => match text {
            b"return" => Some(Keyword::Return),
            _ => None,
        },
        _ => None,
    }
}
