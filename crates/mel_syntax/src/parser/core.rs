/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the precedence ladder, and the
/// top-level `parse_program()` loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".
/// Binding strength for expression parsing, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    /// `?:`
    Ternary,
    /// `||`
    Or,
    /// `&&`
    And,
    /// `==`, `!=`
    Equality,
    /// `<`, `>`, `<=`, `>=`
    Relational,
    /// `+`, `-`
    Additive,
    /// `*`, `/`, `%`
    Multiplicative,
    /// postfix `++`/`--` and `.` member access
    Crement,
    /// unary `-`, `!`, `++`, `--`
    Prefix,
    /// call `(` and index `[`
    Highest,
}

fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Question => Precedence::Ternary,
        TokenKind::Or => Precedence::Or,
        TokenKind::And => Precedence::And,
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equality,
        TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => {
            Precedence::Relational
        }
        TokenKind::Plus | TokenKind::Minus => Precedence::Additive,
        TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Precedence::Multiplicative,
        TokenKind::Increment | TokenKind::Decrement | TokenKind::Dot => Precedence::Crement,
        TokenKind::Lparen | TokenKind::Lbracket => Precedence::Highest,
        _ => Precedence::Lowest,
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass over the lexer's stream with one token of
///   lookahead, and recovers from errors by leaving the failed construct's
///   AST slot empty and continuing at the next statement boundary.
/// - `in_command` is the command-style call mode; it is only ever toggled
///   through [`Parser::with_command_mode`] so every exit path restores it.
pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<SyntaxError>,
    in_command: bool,
}

impl Parser {
    /// Create a new parser, priming the current and lookahead tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Self {
            lexer,
            cur_token,
            peek_token,
            errors: Vec::new(),
            in_command: false,
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// Never fails: diagnostics accumulate on the parser and are available
    /// through [`Parser::errors`] afterwards. The loop advances at least one
    /// token per iteration, so parsing always terminates.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.cur_token.kind != TokenKind::Eof {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }

    /// Formatted diagnostics, in source order: `line:<row>.<column> <message>`.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Structured diagnostics, in source order.
    pub fn diagnostics(&self) -> &[SyntaxError] {
        &self.errors
    }
}
