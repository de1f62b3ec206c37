//! The Land driver.
//!
//! Reads source files, tokenizes them one statement at a time, and runs
//! the handful of statements the language currently has. The interesting
//! machinery lives in `land_lexer` / `land_lexer_core`; this crate is the
//! thin process surface around it.

pub mod input;
pub mod interp;
pub mod reporting;
