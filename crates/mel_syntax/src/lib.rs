//! Syntax frontend for the MEL scripting dialect: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the CLI, the REPL,
//! and future interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not evaluate programs or
//!   resolve names; it turns source text into an AST plus diagnostics.
//! - Parsing never fails outright. Malformed constructs leave empty AST slots and
//!   accumulate [`diagnostics::SyntaxError`] values instead.
//!
//! ## Examples
//! ```rust
//! let parsed = mel_syntax::parser::parse("int $x = 5;\n");
//! assert!(parsed.diagnostics.is_empty());
//! assert_eq!(parsed.program.statements.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
