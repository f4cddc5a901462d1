//! Parser for the MEL language
//!
//! Converts the lexer's token stream into an AST using precedence climbing
//! for expressions and recursive descent for statements. The parser never
//! fails outright: problems become [`SyntaxError`] diagnostics and the
//! offending AST slot is left empty.
//!
//! ## Examples
//!
//! ```rust
//! use mel_syntax::parser;
//!
//! let parsed = parser::parse("int $x = 5;");
//! assert!(parsed.diagnostics.is_empty());
//! assert_eq!(parsed.program.to_source(), "int $x = 5;");
//! ```

use crate::ast::*;
use crate::diagnostics::SyntaxError;
use crate::lexer::{Lexer, Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
