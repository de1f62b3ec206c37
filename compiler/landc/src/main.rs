//! Land CLI.
//!
//! `land FILE...` runs each file's statements in order, writing statement
//! output to stdout and diagnostics to stderr. A file that cannot be read
//! or fails to lex is reported and skipped; the remaining files still run.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use land_lexer_core::SourceBuffer;
use landc::input::read_source;
use landc::interp::{run_statements, InterpError};
use landc::reporting::render_lex_error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: land INPUT");
        return ExitCode::FAILURE;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for arg in &args[1..] {
        process_file(Path::new(arg), &mut out);
    }
    ExitCode::SUCCESS
}

/// Run one file. Failures are reported to stderr, never fatal to the
/// process: later files still run, and the exit code stays 0.
fn process_file(path: &Path, out: &mut impl Write) {
    let source = match read_source(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let buffer = SourceBuffer::new(&source);
    match run_statements(&buffer, out) {
        Ok(()) => {}
        Err(InterpError::Lex(err)) => {
            eprintln!("{}", render_lex_error(path, &source, &err));
        }
        Err(InterpError::Io(err)) => {
            eprintln!("error: failed to write output: {err}");
        }
    }
}
