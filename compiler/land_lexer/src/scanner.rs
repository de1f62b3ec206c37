//! The tokenizer: one token per call over a sentinel-terminated buffer.
//!
//! Trivia (whitespace, newlines, comments) is consumed in an explicit loop
//! at the top of [`Tokenizer::next_token`]; each iteration either consumes
//! trivia and continues, or recognizes a token and returns. Unrecognized
//! bytes are skipped silently — the scanner is deliberately lenient about
//! input it has no rule for, and strict about input it has started to
//! recognize (strings, comments, numbers).

use land_lexer_core::{Cursor, SourceBuffer, Span, TextArena};

use crate::keywords;
use crate::lex_error::LexError;
use crate::parse_helpers::{parse_i32, IntParseError};
use crate::token::{Token, TokenKind};

/// Streaming tokenizer over one source file.
///
/// Holds only a [`Cursor`]; decoded text goes into the caller-owned
/// [`TextArena`] passed to each [`next_token`](Self::next_token) call, so
/// the caller controls text lifetime (cleared per statement by the driver).
#[derive(Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer starting at the cursor's current position.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next token.
    ///
    /// Deterministic: the same source bytes always yield the same token
    /// sequence. `Eof` is terminal — the cursor does not move past the
    /// sentinel, so every subsequent call yields `Eof` again.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for unterminated comments and strings,
    /// invalid string escapes, and out-of-range integer literals. Errors
    /// are fatal for this file: the tokenizer is not resumable past one.
    pub fn next_token(&mut self, arena: &mut TextArena) -> Result<Token, LexError> {
        loop {
            let start = self.cursor.pos();
            match self.cursor.current() {
                // Sentinel. Interior null bytes end the scan the same way;
                // the input contract is "null-terminated buffer".
                0 => {
                    return Ok(Token::new(TokenKind::Eof, Span::new(start, start)));
                }

                // CRLF or a bare CR both consume the full line ending.
                b'\r' => {
                    self.cursor.advance();
                    if self.cursor.current() == b'\n' {
                        self.cursor.advance();
                    }
                }

                b'\n' | b' ' | b'\t' => self.cursor.advance(),

                b'/' => match self.cursor.peek() {
                    b'/' => {
                        self.cursor.advance_n(2);
                        self.cursor.eat_line_comment();
                    }
                    b'*' => {
                        self.cursor.advance_n(2);
                        if !self.cursor.eat_block_comment() {
                            return Err(LexError::unterminated_comment(Span::new(
                                start,
                                self.cursor.pos(),
                            )));
                        }
                    }
                    // A lone `/` has no token rule; skip it like any other
                    // unrecognized byte.
                    _ => self.cursor.advance(),
                },

                b'A'..=b'Z' | b'a'..=b'z' => {
                    return Ok(self.identifier_or_keyword(start, arena));
                }

                b'0'..=b'9' => return self.integer(start),

                b'"' => return self.string_literal(start, arena),

                b'(' => return Ok(self.punct(TokenKind::LParen)),
                b')' => return Ok(self.punct(TokenKind::RParen)),
                b';' => return Ok(self.punct(TokenKind::Semicolon)),

                // No rule for this byte. Skip it and keep scanning.
                _ => self.cursor.advance(),
            }
        }
    }

    /// Single-byte punctuation token at the current position.
    fn punct(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.pos();
        self.cursor.advance();
        Token::new(kind, Span::new(start, self.cursor.pos()))
    }

    /// Identifier or keyword starting at `start` (an ASCII letter).
    ///
    /// Maximal munch over ASCII letters and digits. The full span is probed
    /// against the keyword table first; only genuine identifiers are
    /// interned into the arena.
    fn identifier_or_keyword(&mut self, start: u32, arena: &mut TextArena) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_alphanumeric());
        let text = self.cursor.slice_from(start);
        let span = Span::new(start, self.cursor.pos());

        match keywords::lookup(text) {
            Some(keyword) => Token::new(TokenKind::Keyword(keyword), span),
            None => Token::new(TokenKind::Ident(arena.append(text)), span),
        }
    }

    /// Decimal integer literal starting at `start` (an ASCII digit).
    fn integer(&mut self, start: u32) -> Result<Token, LexError> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        let span = Span::new(start, self.cursor.pos());

        let value = parse_i32(self.cursor.slice_from(start)).map_err(|e| match e {
            IntParseError::Overflow => LexError::int_overflow(span),
            IntParseError::Empty => LexError::malformed_number(span),
        })?;
        Ok(Token::new(TokenKind::Int(value), span))
    }

    /// String literal starting at `start` (the opening `"`).
    ///
    /// Decodes the body into the arena byte by byte; the token's handle
    /// resolves to the decoded text, without the surrounding quotes.
    /// Recognized escapes: `\"` `\\` `\n` `\t`.
    fn string_literal(&mut self, start: u32, arena: &mut TextArena) -> Result<Token, LexError> {
        self.cursor.advance(); // opening quote
        let mark = arena.mark();

        loop {
            match self.cursor.current() {
                // End of input (or interior null) before the closing quote.
                0 => {
                    return Err(LexError::unterminated_string(Span::new(
                        start,
                        self.cursor.pos(),
                    )));
                }
                b'"' => {
                    self.cursor.advance();
                    break;
                }
                b'\\' => {
                    let escape_start = self.cursor.pos();
                    match self.cursor.peek() {
                        b'"' => arena.push(b'"'),
                        b'\\' => arena.push(b'\\'),
                        b'n' => arena.push(b'\n'),
                        b't' => arena.push(b'\t'),
                        // End of input right after the backslash.
                        0 => {
                            return Err(LexError::unterminated_string(Span::new(
                                start,
                                self.cursor.pos() + 1,
                            )));
                        }
                        other => {
                            return Err(LexError::invalid_escape(
                                Span::new(escape_start, escape_start + 2),
                                other,
                            ));
                        }
                    }
                    self.cursor.advance_n(2);
                }
                byte => {
                    arena.push(byte);
                    self.cursor.advance();
                }
            }
        }

        let span = Span::new(start, self.cursor.pos());
        Ok(Token::new(TokenKind::Str(arena.handle_from(mark)), span))
    }
}

/// Tokenize an entire buffer, collecting through the `Eof` token.
///
/// # Errors
///
/// Returns the first [`LexError`]; tokens scanned before it are discarded.
pub fn tokenize(source: &SourceBuffer, arena: &mut TextArena) -> Result<Vec<Token>, LexError> {
    let mut tokenizer = Tokenizer::new(source.cursor());
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token(arena)?;
        let done = matches!(token.kind, TokenKind::Eof);
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
