// ============================================================================
// Expression parsing (precedence climbing)
// ============================================================================

impl Parser {
    /// Parse an expression with `precedence` as the minimum binding strength.
    ///
    /// The climbing loop stops at statement terminators (`;`) and at any
    /// lookahead whose precedence does not exceed the bound. Ternary and
    /// postfix continuations are tried before infix ones. While parsing
    /// command-style arguments, `(` never continues the left operand: it
    /// ends the argument list instead, so `cmd (1 + 2)` keeps the grouped
    /// expression as an argument rather than becoming `cmd(1 + 2)`.
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        // A bare command word not followed by `(` starts a command-style
        // call, except while already collecting command arguments.
        if let Expr::Identifier(ident) = &left {
            if ident.token.kind == TokenKind::ProcIdent
                && !self.peek_is(TokenKind::Lparen)
                && !self.in_command
            {
                return Some(self.parse_command_call(left, TokenKind::Semicolon));
            }
        }

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            match self.peek_token.kind {
                TokenKind::Question => {
                    self.next_token();
                    left = self.parse_ternary(left);
                }
                TokenKind::Increment | TokenKind::Decrement => {
                    self.next_token();
                    left = self.parse_postfix(left);
                }
                TokenKind::Lparen if self.in_command => return Some(left),
                TokenKind::Lparen => {
                    self.next_token();
                    left = self.parse_call(left);
                }
                TokenKind::Lbracket => {
                    self.next_token();
                    left = self.parse_index(left);
                }
                _ => {
                    self.next_token();
                    left = self.parse_infix(left);
                }
            }
        }

        Some(left)
    }

    /// Prefix dispatch over the current token kind.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur_token.kind {
            TokenKind::Ident | TokenKind::ProcIdent | TokenKind::Flag => {
                Some(self.parse_identifier())
            }
            // Type keywords appear as expression leaves in function-style
            // casts such as `(int(3))`.
            TokenKind::String
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::Vector
            | TokenKind::Matrix => Some(self.parse_identifier()),
            TokenKind::IntData | TokenKind::HexData => self.parse_integer_literal(),
            TokenKind::FloatData => self.parse_float_literal(),
            TokenKind::StringData => Some(Expr::StringLiteral(StringLiteral {
                token: self.cur_token.clone(),
                value: self.cur_token.literal.clone(),
            })),
            TokenKind::True | TokenKind::False | TokenKind::On | TokenKind::Off => {
                Some(Expr::BooleanLiteral(BooleanLiteral {
                    token: self.cur_token.clone(),
                    value: matches!(self.cur_token.kind, TokenKind::True | TokenKind::On),
                }))
            }
            TokenKind::Bang | TokenKind::Minus | TokenKind::Increment | TokenKind::Decrement => {
                self.parse_prefix_expression()
            }
            TokenKind::Lparen => self.parse_grouped_or_cast(),
            TokenKind::Lbrace => self.parse_array_literal(),
            TokenKind::LTensor => self.parse_tensor_literal(),
            TokenKind::BackQuote => self.parse_backquote_call(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::While => self.parse_while_expression(),
            TokenKind::Do => self.parse_do_while_expression(),
            TokenKind::For => self.parse_for_expression(),
            TokenKind::Switch => self.parse_switch_expression(),
            _ => {
                self.no_prefix_error();
                None
            }
        }
    }

    fn parse_identifier(&self) -> Expr {
        Expr::Identifier(Identifier::from_token(&self.cur_token))
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        let parsed = if token.kind == TokenKind::HexData {
            i64::from_str_radix(token.literal.trim_start_matches("0x").trim_start_matches("0X"), 16)
        } else {
            token.literal.parse::<i64>()
        };
        match parsed {
            Ok(value) => Some(Expr::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                self.errors.push(SyntaxError::at_token(
                    format!("could not parse {:?} as integer", token.literal),
                    &token,
                ));
                None
            }
        }
    }

    fn parse_float_literal(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        match token.literal.parse::<f64>() {
            Ok(value) => Some(Expr::FloatLiteral(FloatLiteral { token, value })),
            Err(_) => {
                self.errors.push(SyntaxError::at_token(
                    format!("could not parse {:?} as float", token.literal),
                    &token,
                ));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix);
        Some(Expr::Prefix(PrefixExpr {
            token,
            operator,
            right: right.map(Box::new),
        }))
    }

    fn parse_infix(&mut self, left: Expr) -> Expr {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence);
        Expr::Infix(InfixExpr {
            token,
            operator,
            left: Box::new(left),
            right: right.map(Box::new),
        })
    }

    fn parse_postfix(&mut self, left: Expr) -> Expr {
        let token = self.cur_token.clone();
        Expr::Postfix(PostfixExpr {
            operator: token.literal.clone(),
            token,
            left: Box::new(left),
        })
    }

    /// `cond ? consequence : alternative`. The current token is `?`.
    /// Branches parse at lowest precedence, so a nested ternary in the
    /// alternative associates to the right.
    fn parse_ternary(&mut self, condition: Expr) -> Expr {
        let token = self.cur_token.clone();
        self.next_token();
        let consequence = self.parse_expression(Precedence::Lowest);
        let alternative = if self.expect_peek(TokenKind::Colon) {
            self.next_token();
            self.parse_expression(Precedence::Lowest)
        } else {
            None
        };
        Expr::Ternary(TernaryExpr {
            token,
            condition: Box::new(condition),
            consequence: consequence.map(Box::new),
            alternative: alternative.map(Box::new),
        })
    }

    /// `(` as a prefix: either a cast `(int) expr` or a grouped expression.
    /// A type keyword directly after `(` makes it a cast unless the keyword
    /// is itself followed by `(`, which is a function-style call such as
    /// `(int(3))`.
    fn parse_grouped_or_cast(&mut self) -> Option<Expr> {
        if self.peek_token.kind.is_type_keyword() {
            let lparen = self.cur_token.clone();
            self.next_token();
            if !self.peek_is(TokenKind::Lparen) {
                return self.parse_cast(lparen);
            }
        } else {
            self.next_token();
        }

        let expr = self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest));
        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }
        expr
    }

    /// The current token is the cast's type keyword; `token` is the `(`.
    fn parse_cast(&mut self, token: Token) -> Option<Expr> {
        let target = self.cur_token.clone();
        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }
        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix);
        Some(Expr::Cast(CastExpr {
            token,
            target,
            operand: operand.map(Box::new),
        }))
    }

    /// Parenthesized call `foo(a, b)`. The current token is `(`. After the
    /// closing `)`, any further tokens that can start an expression are
    /// consumed as extra command-style arguments: MEL accepts
    /// `cmd(a, b) c d;`.
    fn parse_call(&mut self, function: Expr) -> Expr {
        let token = function.token().clone();
        let mut arguments = self.parse_call_arguments();

        self.with_command_mode(true, |p| {
            while !p.peek_is(TokenKind::Semicolon)
                && !p.peek_is(TokenKind::Eof)
                && Self::has_prefix(p.peek_token.kind)
            {
                p.next_token();
                if let Some(argument) = p.parse_expression(Precedence::Lowest) {
                    arguments.push(argument);
                }
            }
        });

        Expr::Call(CallExpr {
            token,
            function: Box::new(function),
            arguments,
        })
    }

    fn parse_call_arguments(&mut self) -> Vec<Expr> {
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::Rparen) {
            self.next_token();
            return arguments;
        }

        self.next_token();
        if let Some(argument) =
            self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest))
        {
            arguments.push(argument);
        }

        while self.peek_is(TokenKind::Comma) {
            self.next_token(); // ','
            self.next_token();
            if let Some(argument) =
                self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest))
            {
                arguments.push(argument);
            }
        }

        self.expect_peek(TokenKind::Rparen);
        arguments
    }

    /// Command-style call: space-separated arguments up to the statement
    /// terminator (`;` at top level, the closing back-quote inside a
    /// substitution). Arguments are collected while the lookahead can start
    /// an expression; the command mode flag nests and is restored on exit.
    fn parse_command_call(&mut self, function: Expr, closing: TokenKind) -> Expr {
        let token = function.token().clone();
        let mut arguments = Vec::new();

        self.with_command_mode(true, |p| {
            while !p.peek_is(closing)
                && !p.peek_is(TokenKind::Eof)
                && Self::has_prefix(p.peek_token.kind)
            {
                p.next_token();
                if let Some(argument) = p.parse_expression(Precedence::Lowest) {
                    arguments.push(argument);
                }
            }
        });

        Expr::Call(CallExpr {
            token,
            function: Box::new(function),
            arguments,
        })
    }

    /// `` `cmd args` `` substitution. The current token is the opening
    /// back-quote.
    fn parse_backquote_call(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::ProcIdent) {
            return None;
        }
        let function = self.parse_identifier();
        let call = self.parse_command_call(function, TokenKind::BackQuote);
        if !self.expect_peek(TokenKind::BackQuote) {
            return None;
        }
        Some(call)
    }

    /// `base[index]`. Empty brackets are the declared-size placeholder.
    fn parse_index(&mut self, left: Expr) -> Expr {
        let token = self.cur_token.clone();

        if self.peek_is(TokenKind::Rbracket) {
            self.next_token();
            return Expr::Index(IndexExpr {
                token,
                left: Box::new(left),
                index: None,
            });
        }

        self.next_token();
        let index = self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest));
        self.expect_peek(TokenKind::Rbracket);
        Expr::Index(IndexExpr {
            token,
            left: Box::new(left),
            index: index.map(Box::new),
        })
    }

    /// `{a, b, c}` array literal.
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        let mut elements = Vec::new();

        if self.peek_is(TokenKind::Rbrace) {
            self.next_token();
            return Some(Expr::ArrayLiteral(ArrayLiteral { token, elements }));
        }

        self.next_token();
        if let Some(element) =
            self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest))
        {
            elements.push(element);
        }
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            if let Some(element) =
                self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest))
            {
                elements.push(element);
            }
        }

        if !self.expect_peek(TokenKind::Rbrace) {
            return None;
        }
        Some(Expr::ArrayLiteral(ArrayLiteral { token, elements }))
    }

    /// `<<1, 2; 3, 4>>` vector/matrix literal: `,` separates scalars within
    /// a row, `;` separates rows.
    fn parse_tensor_literal(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        let mut rows = Vec::new();
        let mut row = Vec::new();

        loop {
            self.next_token();
            if let Some(element) =
                self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest))
            {
                row.push(element);
            }
            match self.peek_token.kind {
                TokenKind::Comma => self.next_token(),
                TokenKind::Semicolon => {
                    self.next_token();
                    rows.push(std::mem::take(&mut row));
                }
                _ => break,
            }
        }
        rows.push(row);

        if !self.expect_peek(TokenKind::RTensor) {
            return None;
        }
        Some(Expr::TensorLiteral(TensorLiteral { token, rows }))
    }

    // ========================================================================
    // Control constructs (expressions in MEL)
    // ========================================================================

    fn parse_if_expression(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }
        self.next_token();
        let condition = self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest));
        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        let consequence = self.parse_body_block(&token);
        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            let else_token = self.cur_token.clone();
            self.parse_body_block(&else_token)
        } else {
            None
        };

        Some(Expr::If(IfExpr {
            token,
            condition: condition.map(Box::new),
            consequence,
            alternative,
        }))
    }

    fn parse_while_expression(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }
        self.next_token();
        let condition = self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest));
        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }
        let body = self.parse_body_block(&token);
        Some(Expr::While(WhileExpr {
            token,
            condition: condition.map(Box::new),
            body,
        }))
    }

    fn parse_do_while_expression(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        let body = self.parse_body_block(&token);

        if !self.expect_peek(TokenKind::While) {
            return None;
        }
        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }
        self.next_token();
        let condition = self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest));
        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(Expr::DoWhile(DoWhileExpr {
            token,
            body,
            condition: condition.map(Box::new),
        }))
    }

    /// `for (init; cond; change) body`, or `for ($x in $array) body` when
    /// the parenthesized part is a single loop variable followed by `in`.
    fn parse_for_expression(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }
        self.next_token();

        if self.cur_is(TokenKind::Ident) && self.peek_is(TokenKind::In) {
            let element = Identifier::from_token(&self.cur_token);
            self.next_token(); // `in`
            self.next_token();
            let array = self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest));
            if !self.expect_peek(TokenKind::Rparen) {
                return None;
            }
            let body = self.parse_body_block(&token);
            return Some(Expr::ForIn(ForInExpr {
                token,
                element: Some(element),
                array: array.map(Box::new),
                body,
            }));
        }

        let init = self.parse_statement();
        self.next_token();
        let condition = self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest));
        if !self.expect_peek(TokenKind::Semicolon) {
            return None;
        }

        let mut change = Vec::new();
        while !self.peek_is(TokenKind::Rparen) && !self.peek_is(TokenKind::Eof) {
            self.next_token();
            if let Some(stmt) = self.parse_statement() {
                change.push(stmt);
            }
            if self.peek_is(TokenKind::Comma) {
                self.next_token();
            } else {
                break;
            }
        }
        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        let body = self.parse_body_block(&token);
        Some(Expr::For(ForExpr {
            token,
            init: init.map(Box::new),
            condition: condition.map(Box::new),
            change,
            body,
        }))
    }

    /// `switch (cond) { case <literal>: ... default: ... }`. Case labels are
    /// restricted to the literal subfamily; anything else is diagnosed and
    /// the label slot left empty.
    fn parse_switch_expression(&mut self) -> Option<Expr> {
        let token = self.cur_token.clone();
        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }
        self.next_token();
        let condition = self.with_command_mode(false, |p| p.parse_expression(Precedence::Lowest));
        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }
        if !self.expect_peek(TokenKind::Lbrace) {
            return None;
        }

        let mut cases = Vec::new();
        let mut default = None;
        while !self.peek_is(TokenKind::Rbrace) && !self.peek_is(TokenKind::Eof) {
            self.next_token();
            match self.cur_token.kind {
                TokenKind::Case => {
                    let case_token = self.cur_token.clone();
                    self.next_token();
                    let label = match self.parse_expression(Precedence::Lowest) {
                        Some(label) if label.is_literal() => Some(label),
                        Some(label) => {
                            self.errors.push(SyntaxError::at_token(
                                format!("case label must be a literal, got {label}"),
                                label.token(),
                            ));
                            None
                        }
                        None => None,
                    };
                    if !self.expect_peek(TokenKind::Colon) {
                        return None;
                    }
                    let body = self.parse_case_body();
                    cases.push(SwitchCase {
                        token: case_token,
                        label,
                        body,
                    });
                }
                TokenKind::Default => {
                    if !self.expect_peek(TokenKind::Colon) {
                        return None;
                    }
                    default = Some(self.parse_case_body());
                }
                _ => {
                    self.errors.push(SyntaxError::at_token(
                        format!(
                            "expected next token to be {}, got {} instead",
                            TokenKind::Case,
                            self.cur_token.kind
                        ),
                        &self.cur_token,
                    ));
                    while !matches!(
                        self.peek_token.kind,
                        TokenKind::Case | TokenKind::Default | TokenKind::Rbrace | TokenKind::Eof
                    ) {
                        self.next_token();
                    }
                }
            }
        }

        if !self.expect_peek(TokenKind::Rbrace) {
            return None;
        }
        Some(Expr::Switch(SwitchExpr {
            token,
            condition: condition.map(Box::new),
            cases,
            default,
        }))
    }
}
