//! Property-based tests for the MEL frontend
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use mel::lexer::{Lexer, TokenKind};
use mel::parser;
use proptest::prelude::*;

// Strategy for generating MEL variable names
fn variable_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,8}".prop_map(|s| format!("${s}"))
}

// Strategy for generating bare command identifiers
fn command_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,8}".prop_filter("Not a keyword", |s| {
        !matches!(
            s.as_str(),
            "global"
                | "proc"
                | "string"
                | "int"
                | "float"
                | "vector"
                | "matrix"
                | "if"
                | "else"
                | "while"
                | "do"
                | "for"
                | "in"
                | "switch"
                | "case"
                | "default"
                | "break"
                | "continue"
                | "return"
                | "true"
                | "false"
                | "on"
                | "off"
        )
    })
}

proptest! {
    /// Property: the lexer terminates on arbitrary input, reaching EOF in at
    /// most one token per input character
    #[test]
    fn lexer_terminates_on_arbitrary_input(source in "\\PC{0,64}") {
        let mut lexer = Lexer::new(&source);
        let budget = source.chars().count() + 2;
        let mut reached_eof = false;
        for _ in 0..budget {
            if lexer.next_token().kind == TokenKind::Eof {
                reached_eof = true;
                break;
            }
        }
        prop_assert!(reached_eof, "lexer did not reach EOF within {budget} tokens");
    }

    /// Property: EOF is idempotent
    #[test]
    fn lexer_eof_is_stable(source in "\\PC{0,32}") {
        let mut lexer = Lexer::new(&source);
        while lexer.next_token().kind != TokenKind::Eof {}
        prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    /// Property: the parser never fails outright; it always returns a Program
    /// and every diagnostic carries a position
    #[test]
    fn parser_is_total(source in "\\PC{0,64}") {
        let parsed = parser::parse(&source);
        for diagnostic in &parsed.diagnostics {
            prop_assert!(diagnostic.row >= 1);
            prop_assert!(diagnostic.to_string().starts_with("line:"));
        }
    }

    /// Property: generated declarations parse cleanly and render back to the
    /// exact source text
    #[test]
    fn generated_declarations_round_trip(var in variable_strategy(), value in 0u32..1_000_000) {
        let source = format!("int {var} = {value};");
        let parsed = parser::parse(&source);
        prop_assert!(parsed.diagnostics.is_empty(), "diagnostics: {:?}", parsed.diagnostics);
        prop_assert_eq!(parsed.program.to_source(), source);
    }

    /// Property: generated command calls collect each space-separated
    /// argument
    #[test]
    fn generated_command_calls_collect_arguments(
        cmd in command_strategy(),
        var in variable_strategy(),
        value in 0u32..10_000,
    ) {
        let source = format!("{cmd} {var} {value};");
        let parsed = parser::parse(&source);
        prop_assert!(parsed.diagnostics.is_empty(), "diagnostics: {:?}", parsed.diagnostics);
        prop_assert_eq!(parsed.program.to_source(), format!("{cmd}({var}, {value})"));
    }

    /// Property: the canonical rendering of a generated expression is stable
    /// under re-parsing
    #[test]
    fn generated_expressions_render_stably(
        a in variable_strategy(),
        b in variable_strategy(),
        c in 0u32..1_000,
    ) {
        let source = format!("{a} = ({b} + {c}) * 2 - {b};");
        let first = parser::parse(&source);
        prop_assert!(first.diagnostics.is_empty(), "diagnostics: {:?}", first.diagnostics);
        let rendered = first.program.to_source();
        let second = parser::parse(&rendered);
        prop_assert!(second.diagnostics.is_empty(), "diagnostics: {:?}", second.diagnostics);
        prop_assert_eq!(second.program.to_source(), rendered);
    }
}
