// ============================================================================
// Token stream helpers
// ============================================================================

impl Parser {
    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advance past the lookahead when it matches; otherwise record a
    /// diagnostic at the lookahead's position and stay put.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(SyntaxError::at_token(
            format!(
                "expected next token to be {}, got {} instead",
                expected, self.peek_token.kind
            ),
            &self.peek_token,
        ));
    }

    fn no_prefix_error(&mut self) {
        self.errors.push(SyntaxError::at_token(
            format!("no prefix parse function for {} found", self.cur_token.kind),
            &self.cur_token,
        ));
    }

    fn cur_precedence(&self) -> Precedence {
        precedence_of(self.cur_token.kind)
    }

    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }

    /// Run `f` with the command-style mode set to `mode`, restoring the
    /// previous mode on every exit path. Command calls nest (back-quote
    /// substitutions inside command arguments), so plain assignment would
    /// leak the flag across error exits.
    fn with_command_mode<T>(&mut self, mode: bool, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.in_command, mode);
        let out = f(self);
        self.in_command = saved;
        out
    }

    /// Whether a token kind can start an expression. Mirrors the prefix
    /// dispatch in `parse_prefix`; used to decide when a command-style
    /// argument list ends.
    fn has_prefix(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Ident
                | TokenKind::ProcIdent
                | TokenKind::Flag
                | TokenKind::IntData
                | TokenKind::HexData
                | TokenKind::FloatData
                | TokenKind::StringData
                | TokenKind::True
                | TokenKind::False
                | TokenKind::On
                | TokenKind::Off
                | TokenKind::Bang
                | TokenKind::Minus
                | TokenKind::Increment
                | TokenKind::Decrement
                | TokenKind::Lparen
                | TokenKind::Lbrace
                | TokenKind::LTensor
                | TokenKind::BackQuote
                | TokenKind::String
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Vector
                | TokenKind::Matrix
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::For
                | TokenKind::Switch
        )
    }
}
