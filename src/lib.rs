#![forbid(unsafe_code)]
//! MEL dialect frontend
//!
//! A front end for a Maya-style "MEL" scripting dialect: lexer, parser, and AST,
//! plus a small CLI with a REPL and batch parsing over `.mel` files.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Syntax errors are data**: the parser never panics or returns `Err` for bad
//!   source text; it accumulates [`diagnostics::SyntaxError`] values and leaves
//!   the failed AST slots empty.

pub mod cli;

pub use mel_syntax::ast;
pub use mel_syntax::diagnostics;
pub use mel_syntax::lexer;
pub use mel_syntax::parser;
