//! Lexer for MEL source text
//!
//! Handles tokenization including:
//! - `$`-variables, bare-word command identifiers, and DAG paths (`|all|body`)
//! - Numeric literals (decimal, hex, float), strings, booleans
//! - Command flags (`-s`, `-size`) and every one/two-character operator
//! - Line and block comments (discarded, never surfaced as tokens)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, keyword lookup)
//!
//! ## Notes
//!
//! The lexer is pull-based: the parser calls [`Lexer::next_token`] once per
//! token. There is no error channel; unscannable input becomes an `Illegal`
//! token and is diagnosed by the parser.

pub mod tokens;

pub use tokens::{Token, TokenKind, lookup_keyword};

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for MEL source code.
///
/// Scans one token per [`Lexer::next_token`] call over the code points of the
/// input, tracking 1-based row/column positions.
///
/// ## Notes
/// - The row counter advances lazily: the increment for a newline is applied
///   when the character *after* it is read, so the first token on a new line
///   reports the new row. `\r`, `\n`, and `\r\n` line endings all count once.
/// - Once exhausted, the lexer returns `Eof` tokens forever.
pub struct Lexer {
    input: Vec<char>,
    /// Index of `ch` in `input`
    position: usize,
    /// Index of the next unread character
    read_position: usize,
    /// Current character, `'\0'` at end of input
    ch: char,
    row: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source text.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: '\0',
            row: 1,
            column: 0,
        };
        lexer.read_char();
        lexer
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn read_char(&mut self) {
        if self.read_position >= self.input.len() {
            self.ch = '\0';
        } else {
            if self.ch == '\n' {
                self.row += 1;
                self.column = 0;
            }
            // A lone '\r' ends the line; '\r\n' is counted when the '\r' is
            // consumed, so the '\n' must not count again.
            if self.ch == '\r' && self.input[self.read_position] != '\n' {
                self.row += 1;
                self.column = 0;
            }
            self.ch = self.input[self.read_position];
        }
        self.position = self.read_position;
        self.read_position += 1;
        self.column += 1;
    }

    fn peek_char(&self) -> char {
        if self.read_position >= self.input.len() {
            '\0'
        } else {
            self.input[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.read_char();
        }
    }

    // ========================================================================
    // Token scanning
    // ========================================================================

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        // Comments are invisible to the parser.
        while self.ch == '/' && (self.peek_char() == '/' || self.peek_char() == '*') {
            if self.peek_char() == '/' {
                self.skip_line_comment();
            } else {
                self.skip_block_comment();
            }
            self.skip_whitespace();
        }

        let tok = match self.ch {
            '&' => self.peek_check('&', TokenKind::And, TokenKind::Illegal),
            '=' => self.peek_check('=', TokenKind::Eq, TokenKind::Assign),
            '!' => self.peek_check('=', TokenKind::NotEq, TokenKind::Bang),
            '<' => {
                if self.peek_char() == '=' {
                    return self.two_char_token(TokenKind::LtEq);
                }
                self.peek_check('<', TokenKind::LTensor, TokenKind::Lt)
            }
            '>' => {
                if self.peek_char() == '=' {
                    return self.two_char_token(TokenKind::GtEq);
                }
                self.peek_check('>', TokenKind::RTensor, TokenKind::Gt)
            }
            '+' => {
                if self.peek_char() == '=' {
                    return self.two_char_token(TokenKind::PlusAssign);
                }
                self.peek_check('+', TokenKind::Increment, TokenKind::Plus)
            }
            '-' => {
                if self.peek_char() == '=' {
                    return self.two_char_token(TokenKind::MinusAssign);
                }
                if self.peek_char().is_ascii_lowercase() {
                    return self.read_flag();
                }
                self.peek_check('-', TokenKind::Decrement, TokenKind::Minus)
            }
            '*' => self.peek_check('=', TokenKind::StarAssign, TokenKind::Asterisk),
            '/' => {
                if self.peek_char() == '=' {
                    return self.two_char_token(TokenKind::SlashAssign);
                }
                self.char_token(TokenKind::Slash)
            }
            '%' => self.char_token(TokenKind::Percent),
            '^' => self.char_token(TokenKind::Hat),
            '?' => self.char_token(TokenKind::Question),
            ';' => self.char_token(TokenKind::Semicolon),
            '`' => self.char_token(TokenKind::BackQuote),
            '(' => self.char_token(TokenKind::Lparen),
            ')' => self.char_token(TokenKind::Rparen),
            '{' => self.char_token(TokenKind::Lbrace),
            '}' => self.char_token(TokenKind::Rbrace),
            '[' => self.char_token(TokenKind::Lbracket),
            ']' => self.char_token(TokenKind::Rbracket),
            ',' => self.char_token(TokenKind::Comma),
            '$' => return self.read_variable(),
            '"' => return self.read_string(),
            '|' => {
                if self.peek_char() == '|' {
                    return self.two_char_token(TokenKind::Or);
                }
                // A lone '|' opens a DAG path identifier such as `|all|body`.
                return self.read_bare_word();
            }
            '\0' => return Token::new(TokenKind::Eof, "", self.row, self.column),
            _ => {
                if self.ch.is_ascii_digit() || (self.ch == '.' && self.peek_char().is_ascii_digit())
                {
                    if self.ch == '0' && (self.peek_char() == 'x' || self.peek_char() == 'X') {
                        return self.read_hex_number();
                    }
                    return self.read_number();
                }
                if self.ch == '.' && self.peek_char() != '.' {
                    self.char_token(TokenKind::Dot)
                } else if self.ch == ':' && !is_word_start(self.peek_char()) {
                    self.char_token(TokenKind::Colon)
                } else if is_word_start(self.ch) {
                    return self.read_bare_word();
                } else {
                    self.char_token(TokenKind::Illegal)
                }
            }
        };

        self.read_char();
        tok
    }

    /// Token for the current character alone. Does not advance.
    fn char_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.ch.to_string(), self.row, self.column)
    }

    /// Two-character token when the peek matches, else a one-character token.
    /// Consumes the first character on a match; the caller consumes the rest.
    fn peek_check(&mut self, expect: char, matched: TokenKind, single: TokenKind) -> Token {
        let (row, column) = (self.row, self.column);
        if self.peek_char() == expect {
            let first = self.ch;
            self.read_char();
            let literal: String = [first, self.ch].iter().collect();
            Token::new(matched, literal, row, column)
        } else {
            Token::new(single, self.ch.to_string(), row, column)
        }
    }

    /// Unconditional two-character token; consumes both characters.
    fn two_char_token(&mut self, kind: TokenKind) -> Token {
        let (row, column) = (self.row, self.column);
        let literal: String = [self.ch, self.peek_char()].iter().collect();
        self.read_char();
        self.read_char();
        Token::new(kind, literal, row, column)
    }

    fn skip_line_comment(&mut self) {
        self.read_char(); // '/'
        self.read_char(); // '/'
        while self.ch != '\n' && self.ch != '\r' && self.ch != '\0' {
            self.read_char();
        }
    }

    fn skip_block_comment(&mut self) {
        self.read_char(); // '/'
        self.read_char(); // '*'
        while !(self.ch == '*' && self.peek_char() == '/') && self.ch != '\0' {
            self.read_char();
        }
        self.read_char(); // '*'
        self.read_char(); // '/'
    }

    /// `-s`, `-size`: a `-` directly followed by a lowercase letter.
    fn read_flag(&mut self) -> Token {
        let (row, column) = (self.row, self.column);
        let start = self.position;
        self.read_char(); // '-'
        while self.ch.is_ascii_alphanumeric() {
            self.read_char();
        }
        Token::new(TokenKind::Flag, self.slice_from(start), row, column)
    }

    /// `$`-prefixed variable identifier: letters, digits, underscore.
    fn read_variable(&mut self) -> Token {
        let (row, column) = (self.row, self.column);
        let start = self.position;
        self.read_char(); // '$'
        while self.ch.is_ascii_alphanumeric() || self.ch == '_' {
            self.read_char();
        }
        Token::new(TokenKind::Ident, self.slice_from(start), row, column)
    }

    /// Double-quoted string. The token text keeps both quotes. Escapes are
    /// passed through undecoded; `\` only prevents an early terminator.
    /// An unterminated string runs to end of input.
    fn read_string(&mut self) -> Token {
        let (row, column) = (self.row, self.column);
        let start = self.position;
        self.read_char(); // opening '"'
        while self.ch != '"' && self.ch != '\0' {
            if self.ch == '\\' {
                self.read_char();
                if self.ch == '\0' {
                    break;
                }
            }
            self.read_char();
        }
        if self.ch == '"' {
            self.read_char(); // closing '"'
        }
        Token::new(TokenKind::StringData, self.slice_from(start), row, column)
    }

    /// Bare-word identifier, then keyword lookup. Accepts `.`, `|`, and `_`
    /// anywhere, and `:` only when it continues a word (a trailing `:` is
    /// left for the ternary operator).
    fn read_bare_word(&mut self) -> Token {
        let (row, column) = (self.row, self.column);
        let start = self.position;
        self.read_char();
        while is_word_continue(self.ch) || (self.ch == ':' && is_word_continue(self.peek_char())) {
            self.read_char();
        }
        let literal = self.slice_from(start);
        Token::new(lookup_keyword(&literal), literal, row, column)
    }

    fn read_hex_number(&mut self) -> Token {
        let (row, column) = (self.row, self.column);
        let start = self.position;
        self.read_char(); // '0'
        self.read_char(); // 'x' or 'X'
        while self.ch.is_ascii_hexdigit() {
            self.read_char();
        }
        Token::new(TokenKind::HexData, self.slice_from(start), row, column)
    }

    /// Decimal integer or float. An exponent is consumed only when the `e`/`E`
    /// is directly followed by a sign, so `1e6` scans as `1` then `e6`.
    fn read_number(&mut self) -> Token {
        let (row, column) = (self.row, self.column);
        let start = self.position;
        let mut kind = TokenKind::IntData;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        if self.ch == '.' {
            kind = TokenKind::FloatData;
            self.read_char();
            while self.ch.is_ascii_digit() {
                self.read_char();
            }
        }
        if (self.ch == 'e' || self.ch == 'E')
            && (self.peek_char() == '-' || self.peek_char() == '+')
        {
            kind = TokenKind::FloatData;
            self.read_char(); // 'e' or 'E'
            self.read_char(); // sign
            while self.ch.is_ascii_digit() {
                self.read_char();
            }
        }
        Token::new(kind, self.slice_from(start), row, column)
    }

    fn slice_from(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }
}

fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, '_' | '.' | '|' | ':')
}

fn is_word_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '|')
}

// ============================================================================
// Tests
// ============================================================================
