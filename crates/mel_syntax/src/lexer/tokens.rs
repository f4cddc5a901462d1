//! Token types for the MEL lexer.
//!
//! The vocabulary is a closed enum shared by the lexer and the parser:
//! - class tokens (`Ident`, `ProcIdent`, the literal kinds, `Flag`)
//! - operator and delimiter tokens, including every two-character operator
//! - reserved words, resolved through [`lookup_keyword`]
//!
//! ## Notes
//! - `Token` keeps the exact source spelling in `literal`, so AST nodes can
//!   reconstruct source text without consulting the original input.
//! - Rows and columns are 1-based.

use std::fmt;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // ========== Identifiers and Literals ==========
    /// `$`-prefixed variable identifier: `$x`, `$foo_1`
    Ident,
    /// Bare-word command or procedure identifier: `ls`, `polyCube`, `|all|body`
    ProcIdent,
    /// Decimal integer literal
    IntData,
    /// Hexadecimal integer literal: `0xA0`
    HexData,
    /// Floating point literal: `1.1`, `.5`, `1e+3`
    FloatData,
    /// Double-quoted string literal, quotes included in the token text
    StringData,
    /// Command-line flag: `-s`, `-size`
    Flag,

    // ========== Booleans ==========
    True,
    False,
    On,
    Off,

    // ========== Operators ==========
    Assign,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Bang,
    Hat,

    Lt,
    Gt,
    LtEq,
    GtEq,
    Eq,
    NotEq,
    And,
    Or,

    Increment,
    Decrement,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,

    Question,
    Colon,
    Dot,

    // ========== Delimiters ==========
    Comma,
    Semicolon,
    BackQuote,
    Lparen,
    Rparen,
    Lbrace,
    Rbrace,
    Lbracket,
    Rbracket,
    LTensor,
    RTensor,

    // ========== Keywords ==========
    Global,
    Proc,
    String,
    Int,
    Float,
    Vector,
    Matrix,
    If,
    Else,
    While,
    Do,
    For,
    In,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Return,
}

impl TokenKind {
    /// True for the type keywords usable in declarations, casts, and
    /// procedure signatures.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Vector
                | TokenKind::Matrix
        )
    }

    /// True for `=` and the compound assignment operators.
    pub fn is_assign_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::PlusAssign
                | TokenKind::MinusAssign
                | TokenKind::StarAssign
                | TokenKind::SlashAssign
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Illegal => "Illegal",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "Ident",
            TokenKind::ProcIdent => "ProcIdent",
            TokenKind::IntData => "IntData",
            TokenKind::HexData => "HexData",
            TokenKind::FloatData => "FloatData",
            TokenKind::StringData => "StringData",
            TokenKind::Flag => "Flag",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::On => "On",
            TokenKind::Off => "Off",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Bang => "!",
            TokenKind::Hat => "^",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Increment => "++",
            TokenKind::Decrement => "--",
            TokenKind::PlusAssign => "+=",
            TokenKind::MinusAssign => "-=",
            TokenKind::StarAssign => "*=",
            TokenKind::SlashAssign => "/=",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::BackQuote => "`",
            TokenKind::Lparen => "(",
            TokenKind::Rparen => ")",
            TokenKind::Lbrace => "{",
            TokenKind::Rbrace => "}",
            TokenKind::Lbracket => "[",
            TokenKind::Rbracket => "]",
            TokenKind::LTensor => "<<",
            TokenKind::RTensor => ">>",
            TokenKind::Global => "Global",
            TokenKind::Proc => "Proc",
            TokenKind::String => "String",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::Vector => "Vector",
            TokenKind::Matrix => "Matrix",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::While => "While",
            TokenKind::Do => "Do",
            TokenKind::For => "For",
            TokenKind::In => "In",
            TokenKind::Switch => "Switch",
            TokenKind::Case => "Case",
            TokenKind::Default => "Default",
            TokenKind::Break => "Break",
            TokenKind::Continue => "Continue",
            TokenKind::Return => "Return",
        };
        f.write_str(s)
    }
}

/// A token with its kind, source spelling, and 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub row: usize,
    pub column: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, row: usize, column: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            row,
            column,
        }
    }
}

/// Resolve a bare-word spelling to a keyword or boolean kind.
///
/// Unreserved words are command/procedure identifiers.
pub fn lookup_keyword(word: &str) -> TokenKind {
    match word {
        "global" => TokenKind::Global,
        "proc" => TokenKind::Proc,
        "string" => TokenKind::String,
        "int" => TokenKind::Int,
        "float" => TokenKind::Float,
        "vector" => TokenKind::Vector,
        "matrix" => TokenKind::Matrix,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "on" => TokenKind::On,
        "off" => TokenKind::Off,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "do" => TokenKind::Do,
        "for" => TokenKind::For,
        "in" => TokenKind::In,
        "switch" => TokenKind::Switch,
        "case" => TokenKind::Case,
        "default" => TokenKind::Default,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "return" => TokenKind::Return,
        _ => TokenKind::ProcIdent,
    }
}
