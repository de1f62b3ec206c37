//! Statement dispatcher.
//!
//! Pulls tokens one statement at a time — everything up to a semicolon, or
//! up to end of input for a trailing unterminated statement — and runs the
//! ones it recognizes:
//!
//! - `greet;` writes `Greetings!\n`
//! - `print("...");` writes the decoded string literal plus a newline
//!
//! Every other statement is ignored without a diagnostic; the language is
//! an experiment and unknown statements are expected input, not errors.
//!
//! The token list and the text arena are cleared after each statement, so
//! text memory is bounded by the largest single statement, not the file.

use std::io::{self, Write};

use land_lexer::{LexError, Token, TokenKind, Tokenizer};
use land_lexer_core::{SourceBuffer, TextArena};
use tracing::debug;

/// Why a run stopped early.
#[derive(Debug, thiserror::Error)]
pub enum InterpError {
    /// The scanner hit a lexical error; the rest of the file is skipped.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Scan `source` and run each statement, writing output to `out`.
///
/// Statements run in source order; output for statement *n* is complete
/// before statement *n+1* is dispatched. A lexical error aborts the
/// remainder of this source only — the caller decides whether to continue
/// with other files.
pub fn run_statements(source: &SourceBuffer, out: &mut impl Write) -> Result<(), InterpError> {
    let mut tokenizer = Tokenizer::new(source.cursor());
    let mut arena = TextArena::new();
    let mut statement: Vec<Token> = Vec::new();

    loop {
        let token = tokenizer.next_token(&mut arena)?;
        match token.kind {
            TokenKind::Semicolon => {
                dispatch(&statement, &arena, out)?;
                // Handles in `statement` die with the arena text.
                statement.clear();
                arena.clear();
            }
            TokenKind::Eof => {
                // A trailing statement without its semicolon still runs.
                if !statement.is_empty() {
                    dispatch(&statement, &arena, out)?;
                }
                return Ok(());
            }
            _ => statement.push(token),
        }
    }
}

/// Run one statement (tokens between statement boundaries, semicolon
/// excluded).
fn dispatch(statement: &[Token], arena: &TextArena, out: &mut impl Write) -> io::Result<()> {
    if let [name] = statement {
        if ident_is(name, arena, b"greet") {
            return out.write_all(b"Greetings!\n");
        }
    }

    if let [name, lparen, body, rparen] = statement {
        if ident_is(name, arena, b"print")
            && matches!(lparen.kind, TokenKind::LParen)
            && matches!(rparen.kind, TokenKind::RParen)
        {
            if let TokenKind::Str(handle) = body.kind {
                out.write_all(arena.resolve(handle))?;
                return out.write_all(b"\n");
            }
        }
    }

    debug!(token_count = statement.len(), "ignoring unrecognized statement");
    Ok(())
}

/// Is this token an identifier with exactly this spelling?
fn ident_is(token: &Token, arena: &TextArena, spelling: &[u8]) -> bool {
    matches!(token.kind, TokenKind::Ident(handle) if arena.resolve(handle) == spelling)
}
