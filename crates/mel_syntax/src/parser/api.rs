// ============================================================================
// Public parse API
// ============================================================================

/// The result of parsing a source string: the program plus any syntax
/// diagnostics collected along the way.
///
/// Parsing never fails outright. Malformed constructs leave their AST slots
/// empty and push a [`SyntaxError`], so `program` is always present and
/// `diagnostics` tells you how much to trust it.
#[derive(Debug)]
pub struct Parsed {
    pub program: Program,
    pub diagnostics: Vec<SyntaxError>,
}

impl Parsed {
    /// Whether the source parsed without any diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse `source` into a [`Parsed`] program.
///
/// ## Examples
/// ```
/// let parsed = mel_syntax::parser::parse("int $x = 5;");
/// assert!(parsed.diagnostics.is_empty());
/// assert_eq!(parsed.program.to_source(), "int $x = 5;");
/// ```
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Parsed {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let diagnostics = std::mem::take(&mut parser.errors);
    if !diagnostics.is_empty() {
        tracing::debug!(count = diagnostics.len(), "syntax diagnostics");
    }
    Parsed {
        program,
        diagnostics,
    }
}
