// ============================================================================
// Declarations: bulk variable declarations, re-assignment, types, procedures
// ============================================================================

impl Parser {
    /// `int $x = 5, $y, $z = 6;` and friends. The current token is the type
    /// keyword; `ctor` picks the statement variant for it.
    fn parse_decl_statement(&mut self, ctor: fn(DeclStmt) -> Stmt) -> Option<Stmt> {
        let token = self.cur_token.clone();
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let (names, operators, values) = self.parse_decl_items();
        if names.is_empty() {
            return None;
        }
        Some(ctor(DeclStmt {
            token,
            names,
            operators,
            values,
        }))
    }

    /// Re-assignment to an already-declared name: `$x = 5;`, `$m[0] += 2;`.
    ///
    /// A lone indexed read such as `$a[0];` also arrives here through the `[`
    /// lookahead; without an assignment operator (or a following item) it is
    /// a plain expression statement, not an assignment.
    fn parse_assign_statement(&mut self) -> Option<Stmt> {
        let token = self.cur_token.clone();
        let first = self.parse_expression(Precedence::Lowest)?;

        if !self.peek_token.kind.is_assign_operator() && !self.peek_is(TokenKind::Comma) {
            return Some(Stmt::Expression(ExpressionStmt {
                token,
                expression: Some(first),
            }));
        }

        let (names, operators, values) = self.parse_decl_items_from(first);
        Some(Stmt::Assign(DeclStmt {
            token,
            names,
            operators,
            values,
        }))
    }

    /// Shared bulk declaration body: a comma-separated list of names, each
    /// with an optional assignment operator and initializer. When no
    /// initializer was written, a `=` operator token is synthesized at the
    /// name's position to keep the three sequences parallel.
    ///
    /// The current token is the first name.
    fn parse_decl_items(&mut self) -> (Vec<Expr>, Vec<Token>, Vec<Option<Expr>>) {
        match self.parse_expression(Precedence::Lowest) {
            Some(first) => self.parse_decl_items_from(first),
            None => (Vec::new(), Vec::new(), Vec::new()),
        }
    }

    fn parse_decl_items_from(&mut self, first: Expr) -> (Vec<Expr>, Vec<Token>, Vec<Option<Expr>>) {
        let mut names = Vec::new();
        let mut operators = Vec::new();
        let mut values = Vec::new();
        let mut name = first;

        loop {
            if self.peek_token.kind.is_assign_operator() {
                self.next_token();
                operators.push(self.cur_token.clone());
                self.next_token();
                values.push(self.parse_expression(Precedence::Lowest));
            } else {
                let name_token = name.token();
                operators.push(Token::new(
                    TokenKind::Assign,
                    "=",
                    name_token.row,
                    name_token.column,
                ));
                values.push(None);
            }
            names.push(name);

            if !self.peek_is(TokenKind::Comma) {
                break;
            }
            self.next_token(); // ','
            self.next_token(); // next name
            match self.parse_expression(Precedence::Lowest) {
                Some(next) => name = next,
                None => break,
            }
        }

        (names, operators, values)
    }

    /// A type in a procedure signature. The lookahead must be a type keyword;
    /// `string`/`int`/`float`/`vector` take an optional `[]` array qualifier,
    /// `matrix` never does.
    fn parse_type_decl(&mut self) -> Option<TypeDecl> {
        if !self.peek_token.kind.is_type_keyword() {
            self.errors.push(SyntaxError::at_token(
                format!(
                    "expected next token to be a type, got {} instead",
                    self.peek_token.kind
                ),
                &self.peek_token,
            ));
            return None;
        }
        self.next_token();
        let token = self.cur_token.clone();

        let mut is_array = false;
        if token.kind != TokenKind::Matrix && self.peek_is(TokenKind::Lbracket) {
            self.next_token();
            if !self.expect_peek(TokenKind::Rbracket) {
                return None;
            }
            is_array = true;
        }

        Some(TypeDecl { token, is_array })
    }

    /// `proc [type] name(type $a, type $b) { ... }`. The current token is
    /// `proc`.
    fn parse_proc_statement(&mut self) -> Option<ProcStmt> {
        let token = self.cur_token.clone();

        let return_type = if self.peek_token.kind.is_type_keyword() {
            self.parse_type_decl()
        } else {
            None
        };

        if !self.expect_peek(TokenKind::ProcIdent) {
            return None;
        }
        let name = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }
        let parameters = self.parse_proc_parameters()?;

        if !self.expect_peek(TokenKind::Lbrace) {
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(ProcStmt {
            token,
            name,
            return_type,
            parameters,
            body,
        })
    }

    fn parse_proc_parameters(&mut self) -> Option<Vec<ProcParam>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::Rparen) {
            self.next_token();
            return Some(parameters);
        }

        loop {
            let mut ty = self.parse_type_decl()?;
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            let name = Identifier::from_token(&self.cur_token);
            // The array qualifier usually follows the name: `string $names[]`.
            if ty.token.kind != TokenKind::Matrix && self.peek_is(TokenKind::Lbracket) {
                self.next_token();
                if !self.expect_peek(TokenKind::Rbracket) {
                    return None;
                }
                ty.is_array = true;
            }
            parameters.push(ProcParam { ty, name });

            if !self.peek_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }
        Some(parameters)
    }

    /// `global proc ...`: wraps exactly one procedure declaration.
    fn parse_global_statement(&mut self) -> Option<Stmt> {
        let token = self.cur_token.clone();
        if !self.expect_peek(TokenKind::Proc) {
            return None;
        }
        let proc = self.parse_proc_statement();
        Some(Stmt::Global(GlobalStmt { token, proc }))
    }
}
