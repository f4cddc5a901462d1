//! AST node types for MEL programs
//!
//! A [`Program`] owns an ordered sequence of top-level statements. Statements
//! and expressions are sum types with one variant per node kind, so every
//! consumer (renderer, future evaluator) is exhaustiveness-checked.
//!
//! ## Notes
//! - Every node stores its defining [`Token`] and exposes `token_literal()`
//!   plus a canonical source rendering via `Display`. Rendering normalizes
//!   parenthesization (`1 * (2 + 3)` renders as `(1 * (2 + 3))`) but stays
//!   re-parsable.
//! - MEL's control constructs (`if`, `while`, `for`, `switch`, ...) are
//!   expressions, not statements: they appear as the expression of an
//!   enclosing expression statement.
//! - `Option` child slots are parse-failure slots: the parser records a
//!   diagnostic and leaves the slot empty rather than halting.

use std::fmt;

use crate::lexer::Token;

// ============================================================================
// PROGRAM
// ============================================================================

/// The root of a parsed MEL source unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Literal text of the first statement's defining token, or `""`.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Stmt::token_literal)
            .unwrap_or("")
    }

    /// Canonical source rendering of the whole program.
    pub fn to_source(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

// ============================================================================
// STATEMENTS
// ============================================================================

/// A top-level or block-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    StringDecl(DeclStmt),
    IntDecl(DeclStmt),
    FloatDecl(DeclStmt),
    VectorDecl(DeclStmt),
    MatrixDecl(DeclStmt),
    /// Re-assignment to already-declared names; same shape as a declaration
    /// but without a leading type keyword.
    Assign(DeclStmt),
    Block(BlockStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Return(ReturnStmt),
    Proc(ProcStmt),
    Global(GlobalStmt),
}

impl Stmt {
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Expression(s) => &s.token.literal,
            Stmt::StringDecl(s)
            | Stmt::IntDecl(s)
            | Stmt::FloatDecl(s)
            | Stmt::VectorDecl(s)
            | Stmt::MatrixDecl(s)
            | Stmt::Assign(s) => &s.token.literal,
            Stmt::Block(s) => &s.token.literal,
            Stmt::Break(s) => &s.token.literal,
            Stmt::Continue(s) => &s.token.literal,
            Stmt::Return(s) => &s.token.literal,
            Stmt::Proc(s) => &s.token.literal,
            Stmt::Global(s) => &s.token.literal,
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(s) => write!(f, "{s}"),
            Stmt::StringDecl(s)
            | Stmt::IntDecl(s)
            | Stmt::FloatDecl(s)
            | Stmt::VectorDecl(s)
            | Stmt::MatrixDecl(s) => {
                write!(f, "{} ", s.token.literal)?;
                s.fmt_items(f)
            }
            Stmt::Assign(s) => s.fmt_items(f),
            Stmt::Block(s) => write!(f, "{s}"),
            Stmt::Break(s) => write!(f, "{s}"),
            Stmt::Continue(s) => write!(f, "{s}"),
            Stmt::Return(s) => write!(f, "{s}"),
            Stmt::Proc(s) => write!(f, "{s}"),
            Stmt::Global(s) => write!(f, "{s}"),
        }
    }
}

/// An expression in statement position. Renders without a trailing `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Option<Expr>,
}

impl fmt::Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expr) => write!(f, "{expr}"),
            None => Ok(()),
        }
    }
}

/// A bulk declaration (`int $x = 5, $y, $z = 6;`) or re-assignment.
///
/// The three sequences are parallel and equal in length: one name, one
/// assignment operator, and one optional initializer per declared item. When
/// no initializer was written the operator defaults to a synthesized `=` and
/// the value slot is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclStmt {
    /// Type keyword for typed declarations; the first name's token for
    /// re-assignments.
    pub token: Token,
    pub names: Vec<Expr>,
    pub operators: Vec<Token>,
    pub values: Vec<Option<Expr>>,
}

impl DeclStmt {
    fn fmt_items(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
            if let (Some(Some(value)), Some(op)) = (self.values.get(i), self.operators.get(i)) {
                write!(f, " {} {}", op.literal, value)?;
            }
        }
        write!(f, ";")
    }
}

/// A braced sequence of statements.
///
/// Also used as the synthetic wrapper for brace-less single-statement bodies
/// of control constructs; in that case `token` is the governing keyword's
/// token, not a `{`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl fmt::Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub token: Token,
}

impl fmt::Display for BreakStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "break;")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub token: Token,
}

impl fmt::Display for ContinueStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "continue;")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub return_value: Option<Expr>,
}

impl fmt::Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.return_value {
            Some(value) => write!(f, "return {value};"),
            None => write!(f, "return;"),
        }
    }
}

/// A procedure declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcStmt {
    pub token: Token,
    pub name: Token,
    pub return_type: Option<TypeDecl>,
    pub parameters: Vec<ProcParam>,
    pub body: BlockStmt,
}

impl fmt::Display for ProcStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "proc ")?;
        if let Some(ty) = &self.return_type {
            write!(f, "{ty} ")?;
        }
        write!(f, "{}(", self.name.literal)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {}", self.body)
    }
}

/// A `(type, name)` procedure parameter pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcParam {
    pub ty: TypeDecl,
    pub name: Identifier,
}

impl fmt::Display for ProcParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// `global proc ...;` wraps exactly one procedure declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalStmt {
    pub token: Token,
    pub proc: Option<ProcStmt>,
}

impl fmt::Display for GlobalStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.proc {
            Some(proc) => write!(f, "global {proc}"),
            None => write!(f, "global"),
        }
    }
}

/// The label-less statement block between one `case`/`default` label and the
/// next.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseStmt {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl fmt::Display for CaseStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    FloatLiteral(FloatLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    TensorLiteral(TensorLiteral),
    ArrayLiteral(ArrayLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    Postfix(PostfixExpr),
    Ternary(TernaryExpr),
    Index(IndexExpr),
    Call(CallExpr),
    Cast(CastExpr),
    TypeDecl(TypeDecl),
    If(IfExpr),
    While(WhileExpr),
    DoWhile(DoWhileExpr),
    For(ForExpr),
    ForIn(ForInExpr),
    Switch(SwitchExpr),
}

impl Expr {
    /// The node's defining token.
    pub fn token(&self) -> &Token {
        match self {
            Expr::Identifier(e) => &e.token,
            Expr::IntegerLiteral(e) => &e.token,
            Expr::FloatLiteral(e) => &e.token,
            Expr::StringLiteral(e) => &e.token,
            Expr::BooleanLiteral(e) => &e.token,
            Expr::TensorLiteral(e) => &e.token,
            Expr::ArrayLiteral(e) => &e.token,
            Expr::Prefix(e) => &e.token,
            Expr::Infix(e) => &e.token,
            Expr::Postfix(e) => &e.token,
            Expr::Ternary(e) => &e.token,
            Expr::Index(e) => &e.token,
            Expr::Call(e) => &e.token,
            Expr::Cast(e) => &e.token,
            Expr::TypeDecl(e) => &e.token,
            Expr::If(e) => &e.token,
            Expr::While(e) => &e.token,
            Expr::DoWhile(e) => &e.token,
            Expr::For(e) => &e.token,
            Expr::ForIn(e) => &e.token,
            Expr::Switch(e) => &e.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    /// True for the restricted literal subfamily accepted as `switch` case
    /// labels.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expr::IntegerLiteral(_)
                | Expr::FloatLiteral(_)
                | Expr::StringLiteral(_)
                | Expr::BooleanLiteral(_)
                | Expr::TensorLiteral(_)
        )
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(e) => write!(f, "{e}"),
            Expr::IntegerLiteral(e) => write!(f, "{e}"),
            Expr::FloatLiteral(e) => write!(f, "{e}"),
            Expr::StringLiteral(e) => write!(f, "{e}"),
            Expr::BooleanLiteral(e) => write!(f, "{e}"),
            Expr::TensorLiteral(e) => write!(f, "{e}"),
            Expr::ArrayLiteral(e) => write!(f, "{e}"),
            Expr::Prefix(e) => write!(f, "{e}"),
            Expr::Infix(e) => write!(f, "{e}"),
            Expr::Postfix(e) => write!(f, "{e}"),
            Expr::Ternary(e) => write!(f, "{e}"),
            Expr::Index(e) => write!(f, "{e}"),
            Expr::Call(e) => write!(f, "{e}"),
            Expr::Cast(e) => write!(f, "{e}"),
            Expr::TypeDecl(e) => write!(f, "{e}"),
            Expr::If(e) => write!(f, "{e}"),
            Expr::While(e) => write!(f, "{e}"),
            Expr::DoWhile(e) => write!(f, "{e}"),
            Expr::For(e) => write!(f, "{e}"),
            Expr::ForIn(e) => write!(f, "{e}"),
            Expr::Switch(e) => write!(f, "{e}"),
        }
    }
}

/// A `$`-variable, bare command word, flag, or type keyword used as a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn from_token(token: &Token) -> Self {
        Self {
            token: token.clone(),
            value: token.literal.clone(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Decimal or hexadecimal integer literal. The token keeps the spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    pub token: Token,
    pub value: f64,
}

impl fmt::Display for FloatLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

/// String literal. `value` keeps the surrounding quotes, matching the token.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// `true`/`false`/`on`/`off`.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

/// `<<row; row; ...>>` vector/matrix literal: rows of scalar expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorLiteral {
    pub token: Token,
    pub rows: Vec<Vec<Expr>>,
}

impl fmt::Display for TensorLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<<")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            for (j, element) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{element}")?;
            }
        }
        write!(f, ">>")
    }
}

/// `{...}` array literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub token: Token,
    pub elements: Vec<Expr>,
}

impl fmt::Display for ArrayLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Option<Box<Expr>>,
}

impl fmt::Display for PrefixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.operator)?;
        if let Some(right) = &self.right {
            write!(f, "{right}")?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub token: Token,
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Option<Box<Expr>>,
}

impl fmt::Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {}", self.left, self.operator)?;
        if let Some(right) = &self.right {
            write!(f, " {right}")?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpr {
    pub token: Token,
    pub operator: String,
    pub left: Box<Expr>,
}

impl fmt::Display for PostfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.left, self.operator)
    }
}

/// `cond ? consequence : alternative`.
#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: Option<Box<Expr>>,
    pub alternative: Option<Box<Expr>>,
}

impl fmt::Display for TernaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} ?", self.condition)?;
        if let Some(consequence) = &self.consequence {
            write!(f, " {consequence}")?;
        }
        write!(f, " :")?;
        if let Some(alternative) = &self.alternative {
            write!(f, " {alternative}")?;
        }
        write!(f, ")")
    }
}

/// `base[index]`. A `None` index is the declaration-size placeholder `[]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub index: Option<Box<Expr>>,
}

impl fmt::Display for IndexExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.index {
            Some(index) => write!(f, "{}[{}]", self.left, index),
            None => write!(f, "{}[]", self.left),
        }
    }
}

/// A call. Parenthesized, command-style, and back-quoted invocations all
/// produce this node; `token` is the callee identifier's token.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub token: Token,
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, ")")
    }
}

/// `(type) operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub token: Token,
    pub target: Token,
    pub operand: Option<Box<Expr>>,
}

impl fmt::Display for CastExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(({})", self.target.literal)?;
        if let Some(operand) = &self.operand {
            write!(f, " {operand}")?;
        }
        write!(f, ")")
    }
}

/// A type in a procedure signature: base keyword plus array qualifier.
///
/// `matrix` never carries `is_array`; matrix dimensions are written as index
/// expressions on the declared name instead.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub token: Token,
    pub is_array: bool,
}

impl fmt::Display for TypeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_array {
            write!(f, "{}[]", self.token.literal)
        } else {
            f.write_str(&self.token.literal)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Option<Box<Expr>>,
    pub consequence: Option<BlockStmt>,
    pub alternative: Option<BlockStmt>,
}

impl fmt::Display for IfExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if (")?;
        if let Some(condition) = &self.condition {
            write!(f, "{condition}")?;
        }
        write!(f, ")")?;
        if let Some(consequence) = &self.consequence {
            write!(f, " {consequence}")?;
        }
        if let Some(alternative) = &self.alternative {
            write!(f, " else {alternative}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileExpr {
    pub token: Token,
    pub condition: Option<Box<Expr>>,
    pub body: Option<BlockStmt>,
}

impl fmt::Display for WhileExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while (")?;
        if let Some(condition) = &self.condition {
            write!(f, "{condition}")?;
        }
        write!(f, ")")?;
        if let Some(body) = &self.body {
            write!(f, " {body}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileExpr {
    pub token: Token,
    pub body: Option<BlockStmt>,
    pub condition: Option<Box<Expr>>,
}

impl fmt::Display for DoWhileExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "do ")?;
        if let Some(body) = &self.body {
            write!(f, "{body}")?;
        }
        write!(f, " while (")?;
        if let Some(condition) = &self.condition {
            write!(f, "{condition}")?;
        }
        write!(f, ");")
    }
}

/// `for (init; condition; change) body`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForExpr {
    pub token: Token,
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Box<Expr>>,
    pub change: Vec<Stmt>,
    pub body: Option<BlockStmt>,
}

impl fmt::Display for ForExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "for (")?;
        if let Some(init) = &self.init {
            write!(f, "{init}")?;
        }
        write!(f, " ")?;
        if let Some(condition) = &self.condition {
            write!(f, "{condition}")?;
        }
        write!(f, "; ")?;
        for (i, change) in self.change.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{change}")?;
        }
        write!(f, ")")?;
        if let Some(body) = &self.body {
            write!(f, " {body}")?;
        }
        Ok(())
    }
}

/// `for ($element in $array) body`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForInExpr {
    pub token: Token,
    pub element: Option<Identifier>,
    pub array: Option<Box<Expr>>,
    pub body: Option<BlockStmt>,
}

impl fmt::Display for ForInExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "for (")?;
        if let Some(element) = &self.element {
            write!(f, "{element}")?;
        }
        write!(f, " in ")?;
        if let Some(array) = &self.array {
            write!(f, "{array}")?;
        }
        write!(f, ")")?;
        if let Some(body) = &self.body {
            write!(f, " {body}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchExpr {
    pub token: Token,
    pub condition: Option<Box<Expr>>,
    pub cases: Vec<SwitchCase>,
    pub default: Option<CaseStmt>,
}

impl fmt::Display for SwitchExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "switch (")?;
        if let Some(condition) = &self.condition {
            write!(f, "{condition}")?;
        }
        write!(f, ") {{")?;
        for case in &self.cases {
            write!(f, "{case}")?;
        }
        if let Some(default) = &self.default {
            write!(f, "default: {default}")?;
        }
        write!(f, "}}")
    }
}

/// One `case <literal>:` label and its body.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub token: Token,
    /// `None` when the label failed to parse or was not a literal.
    pub label: Option<Expr>,
    pub body: CaseStmt,
}

impl fmt::Display for SwitchCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case ")?;
        if let Some(label) = &self.label {
            write!(f, "{label}")?;
        }
        write!(f, ": {}", self.body)
    }
}

// ============================================================================
// Tests
// ============================================================================
