// ============================================================================
// Statement parsing
// ============================================================================

impl Parser {
    /// Parse one statement, then consume one optional trailing `;`.
    /// Semicolons are not required before `}` or end of input.
    fn parse_statement(&mut self) -> Option<Stmt> {
        let stmt = self.parse_statement_inner();
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
        stmt
    }

    fn parse_statement_inner(&mut self) -> Option<Stmt> {
        match self.cur_token.kind {
            TokenKind::Global => self.parse_global_statement(),
            TokenKind::Proc => self.parse_proc_statement().map(Stmt::Proc),
            TokenKind::String => self.parse_decl_statement(Stmt::StringDecl),
            TokenKind::Int => self.parse_decl_statement(Stmt::IntDecl),
            TokenKind::Float => self.parse_decl_statement(Stmt::FloatDecl),
            TokenKind::Vector => self.parse_decl_statement(Stmt::VectorDecl),
            TokenKind::Matrix => self.parse_decl_statement(Stmt::MatrixDecl),
            TokenKind::Ident
                if self.peek_token.kind.is_assign_operator()
                    || self.peek_is(TokenKind::Lbracket) =>
            {
                self.parse_assign_statement()
            }
            TokenKind::Lbrace => self.parse_block_statement().map(Stmt::Block),
            TokenKind::Break => Some(Stmt::Break(BreakStmt {
                token: self.cur_token.clone(),
            })),
            TokenKind::Continue => Some(Stmt::Continue(ContinueStmt {
                token: self.cur_token.clone(),
            })),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest);
        Some(Stmt::Expression(ExpressionStmt { token, expression }))
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let token = self.cur_token.clone();
        let return_value = if matches!(
            self.peek_token.kind,
            TokenKind::Semicolon | TokenKind::Rbrace | TokenKind::Eof
        ) {
            None
        } else {
            self.next_token();
            self.parse_expression(Precedence::Lowest)
        };
        Some(Stmt::Return(ReturnStmt { token, return_value }))
    }

    /// `{ ... }`. The current token is `{`; on return the current token is
    /// the matching `}`.
    fn parse_block_statement(&mut self) -> Option<BlockStmt> {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.cur_is(TokenKind::Rbrace) {
            if self.cur_is(TokenKind::Eof) {
                self.errors.push(SyntaxError::at_token(
                    format!(
                        "expected next token to be {}, got {} instead",
                        TokenKind::Rbrace,
                        TokenKind::Eof
                    ),
                    &self.cur_token,
                ));
                return None;
            }
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        Some(BlockStmt { token, statements })
    }

    /// The body of a control construct: either a brace block or a single
    /// statement wrapped in a synthetic block carrying the governing
    /// keyword's token.
    fn parse_body_block(&mut self, keyword: &Token) -> Option<BlockStmt> {
        if self.peek_is(TokenKind::Lbrace) {
            self.next_token();
            self.parse_block_statement()
        } else {
            self.next_token();
            let stmt = self.parse_statement()?;
            Some(BlockStmt {
                token: keyword.clone(),
                statements: vec![stmt],
            })
        }
    }

    /// Statements between one `case`/`default` label and the next. The
    /// current token is the label's `:`.
    fn parse_case_body(&mut self) -> CaseStmt {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        while !matches!(
            self.peek_token.kind,
            TokenKind::Case | TokenKind::Default | TokenKind::Rbrace | TokenKind::Eof
        ) {
            self.next_token();
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
        }

        CaseStmt { token, statements }
    }
}
