//! Diagnostic rendering.
//!
//! One-line `path:line:col: error: message` diagnostics, the compact form
//! editors and CI log scrapers parse.

use std::path::Path;

use land_lexer::LexError;

/// Render a lexical error for stderr.
pub fn render_lex_error(path: &Path, source: &[u8], error: &LexError) -> String {
    let (line, col) = line_col(source, error.span.start);
    format!("{}:{line}:{col}: error: {error}", path.display())
}

/// 1-based line and column of a byte offset.
///
/// Column counts bytes, not display width; good enough for the ASCII
/// sources the scanner accepts.
fn line_col(source: &[u8], offset: u32) -> (u32, u32) {
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let mut line = 1;
    let mut col = 1;
    for &byte in source.iter().take(offset) {
        if byte == b'\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use land_lexer_core::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn offset_zero_is_line_one_col_one() {
        assert_eq!(line_col(b"abc", 0), (1, 1));
    }

    #[test]
    fn columns_advance_within_a_line() {
        assert_eq!(line_col(b"abcdef", 4), (1, 5));
    }

    #[test]
    fn newlines_advance_lines() {
        let source = b"one\ntwo\nthree";
        assert_eq!(line_col(source, 4), (2, 1));
        assert_eq!(line_col(source, 9), (3, 2));
    }

    #[test]
    fn rendered_error_has_the_compact_shape() {
        let source = b"greet;\n\"oops";
        let error = LexError::unterminated_string(Span::new(7, 12));
        let rendered = render_lex_error(Path::new("test.land"), source, &error);
        assert_eq!(
            rendered,
            "test.land:2:1: error: unterminated string literal (missing closing `\"`)"
        );
    }
}
