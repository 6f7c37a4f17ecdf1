//! Stack-based reduction of type expressions into [`TypeFormula`]s.

use tracing::trace;

use crate::{
    core::{
        formula::TypeFormula,
        tokenize::{tokenize, Token},
    },
    error::ParseError,
};

/// Default maximum nesting depth of type parameters.
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Default maximum number of tokens in a single type expression.
pub const DEFAULT_MAX_TOKENS: usize = 4096;

/// Bounds applied while parsing, so that adversarial input cannot grow the parser stack without
/// limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserLimits {
    /// Maximum number of simultaneously open `<`.
    pub max_depth: usize,
    /// Maximum number of tokens, commas included.
    pub max_tokens: usize,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, max_tokens: DEFAULT_MAX_TOKENS }
    }
}

impl ParserLimits {
    /// Limits that never reject an expression.
    pub fn unbounded() -> Self {
        Self { max_depth: usize::MAX, max_tokens: usize::MAX }
    }
}

/// An entry of the reduction stack.
#[derive(Debug)]
enum StackEntry {
    /// A `<` waiting for its matching `>`.
    BeginParameters,
    /// A type name that has not been reduced yet.
    Name(String),
    /// A fully reduced type.
    Formula(TypeFormula),
}

/// Parses type expressions such as `MultiResultVec<MultiResult2<Address, u64>>`.
///
/// ```
/// use mxabi_types::{ParserLimits, TypeFormulaParser};
///
/// let parser = TypeFormulaParser::with_limits(ParserLimits { max_depth: 1, max_tokens: 64 });
/// assert!(parser.parse_expression("List<u64>").is_ok());
/// assert!(parser.parse_expression("List<List<u64>>").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeFormulaParser {
    limits: ParserLimits,
}

impl TypeFormulaParser {
    /// Creates a parser with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given limits.
    pub fn with_limits(limits: ParserLimits) -> Self {
        Self { limits }
    }

    /// The limits this parser enforces.
    pub fn limits(&self) -> ParserLimits {
        self.limits
    }

    /// Parses a single type expression.
    ///
    /// Malformed input is rejected as a whole, there is no partial result.
    pub fn parse_expression(&self, expression: &str) -> Result<TypeFormula, ParseError> {
        let tokens = tokenize(expression);
        if tokens.len() > self.limits.max_tokens {
            return Err(ParseError::TokenLimitExceeded {
                limit: self.limits.max_tokens,
                found: tokens.len(),
            });
        }

        // commas carry no structure, siblings are already separated by stack position
        let tokens = tokens.into_iter().filter(|token| *token != Token::Comma);

        let mut stack: Vec<StackEntry> = Vec::new();
        let mut depth = 0usize;

        for token in tokens {
            match token {
                Token::Identifier(name) => stack.push(StackEntry::Name(name)),
                Token::BeginParameters => {
                    depth += 1;
                    if depth > self.limits.max_depth {
                        return Err(ParseError::DepthLimitExceeded {
                            limit: self.limits.max_depth,
                        });
                    }
                    stack.push(StackEntry::BeginParameters);
                }
                Token::EndParameters => {
                    let formula = reduce(&mut stack)?;
                    trace!("reduced type formula '{}'", formula);
                    depth = depth.saturating_sub(1);
                    stack.push(StackEntry::Formula(formula));
                }
                Token::Comma => {}
            }
        }

        if stack.len() > 1 {
            if stack.iter().any(|entry| matches!(entry, StackEntry::BeginParameters)) {
                return Err(ParseError::UnclosedParameters);
            }
            return Err(ParseError::TrailingEntries(stack.len()));
        }

        match stack.pop() {
            Some(StackEntry::Name(name)) => Ok(TypeFormula::leaf(name)),
            Some(StackEntry::Formula(formula)) => Ok(formula),
            Some(StackEntry::BeginParameters) => Err(ParseError::UnclosedParameters),
            None => Err(ParseError::EmptyExpression),
        }
    }
}

/// Pops everything up to the innermost `<` and the type name before it, and builds the generic
/// type they describe.
fn reduce(stack: &mut Vec<StackEntry>) -> Result<TypeFormula, ParseError> {
    let mut type_parameters = Vec::new();

    loop {
        match stack.pop() {
            Some(StackEntry::BeginParameters) => break,
            Some(StackEntry::Name(name)) => type_parameters.push(TypeFormula::leaf(name)),
            Some(StackEntry::Formula(formula)) => type_parameters.push(formula),
            None => return Err(ParseError::UnmatchedEnd),
        }
    }

    // popped right to left
    type_parameters.reverse();

    match stack.pop() {
        Some(StackEntry::Name(name)) => Ok(TypeFormula::new(name, type_parameters)),
        _ => Err(ParseError::MissingTypeName),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(expression: &str) -> Result<TypeFormula, ParseError> {
        TypeFormulaParser::new().parse_expression(expression)
    }

    #[test]
    fn test_parse_leaf() {
        let formula = parse("i64").expect("failed to parse");
        assert_eq!(formula, TypeFormula::leaf("i64"));
        assert!(formula.type_parameters().is_empty());
    }

    #[test]
    fn test_parse_nested() {
        let expression = "MultiResultVec<MultiResult2<Address, u64>>";
        let formula = parse(expression).expect("failed to parse");

        assert_eq!(formula.name(), "MultiResultVec");
        assert_eq!(formula.type_parameters().len(), 1);

        let inner = &formula.type_parameters()[0];
        assert_eq!(inner.name(), "MultiResult2");
        assert_eq!(
            inner.type_parameters(),
            &[TypeFormula::leaf("Address"), TypeFormula::leaf("u64")]
        );

        assert_eq!(formula.to_string(), expression);
    }

    #[test]
    fn test_parse_siblings_keep_order() {
        let formula = parse("tuple3<i32, bytes, Option<i64>>").expect("failed to parse");
        let names =
            formula.type_parameters().iter().map(|p| p.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["i32", "bytes", "Option"]);
        assert_eq!(formula.type_parameters()[2].type_parameters(), &[TypeFormula::leaf("i64")]);
    }

    #[test]
    fn test_parse_duplicate_siblings() {
        let formula = parse("tuple2<i32, i32>").expect("failed to parse");
        assert_eq!(formula.type_parameters(), &[TypeFormula::leaf("i32"), TypeFormula::leaf("i32")]);
    }

    #[test]
    fn test_round_trip_vectors() {
        for expression in [
            "MultiResultVec<MultiResult2<Address, u64>>",
            "tuple3<i32, bytes, Option<i64>>",
            "tuple2<i32, i32>",
            "tuple<List<u64>, List<u64>>",
            "variadic<multi<BigUint, List<EsdtTokenPayment>, Option<array32<u8>>>>",
        ] {
            let formula = parse(expression).expect("failed to parse");
            assert_eq!(formula.to_string(), expression);
        }
    }

    #[test]
    fn test_parse_normalizes_spacing() {
        let formula = parse("  tuple2< i32 ,i32 > ").expect("failed to parse");
        assert_eq!(formula.to_string(), "tuple2<i32, i32>");
    }

    #[test]
    fn test_parse_deep_nesting() {
        let expression = "Option<Option<Option<Option<List<u8>>>>>";
        let formula = parse(expression).expect("failed to parse");
        assert_eq!(formula.depth(), 5);
        assert_eq!(formula.to_string(), expression);
    }

    #[test]
    fn test_parse_empty_parameter_list() {
        assert_eq!(parse("Foo<>"), Ok(TypeFormula::leaf("Foo")));
        assert_eq!(parse("Foo<>").map(|f| f.to_string()), Ok("Foo".to_string()));

        let formula = parse("List<Option<>, u8>").expect("failed to parse");
        assert_eq!(formula.to_string(), "List<Option, u8>");
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse(""), Err(ParseError::EmptyExpression));
        assert_eq!(parse("   "), Err(ParseError::EmptyExpression));
        assert_eq!(parse("<>"), Err(ParseError::MissingTypeName));
        assert_eq!(parse("Foo<"), Err(ParseError::UnclosedParameters));
        assert_eq!(parse("Foo>"), Err(ParseError::UnmatchedEnd));
        assert_eq!(parse("<Foo>"), Err(ParseError::MissingTypeName));
        assert_eq!(parse("List<<u8>>"), Err(ParseError::MissingTypeName));
        assert_eq!(parse("u8, u16"), Err(ParseError::TrailingEntries(2)));
        assert_eq!(parse("List<u8>u16"), Err(ParseError::TrailingEntries(2)));
        assert_eq!(parse("<"), Err(ParseError::UnclosedParameters));
    }

    #[test]
    fn test_depth_limit() {
        let parser = TypeFormulaParser::with_limits(ParserLimits { max_depth: 2, max_tokens: 100 });
        assert!(parser.parse_expression("List<Option<u8>>").is_ok());
        assert_eq!(
            parser.parse_expression("List<Option<List<u8>>>"),
            Err(ParseError::DepthLimitExceeded { limit: 2 })
        );

        // siblings do not add up
        assert!(parser.parse_expression("tuple2<List<u8>, List<u8>>").is_ok());
    }

    #[test]
    fn test_token_limit() {
        let parser = TypeFormulaParser::with_limits(ParserLimits { max_depth: 8, max_tokens: 6 });
        assert!(parser.parse_expression("tuple2<i32, i32>").is_ok());
        assert_eq!(
            parser.parse_expression("tuple3<i32, i32, i32>"),
            Err(ParseError::TokenLimitExceeded { limit: 6, found: 8 })
        );
    }

    #[test]
    fn test_unbounded_limits() {
        let expression = format!("{}u8{}", "List<".repeat(200), ">".repeat(200));
        let parser = TypeFormulaParser::with_limits(ParserLimits::unbounded());
        let formula = parser.parse_expression(&expression).expect("failed to parse");
        assert_eq!(formula.depth(), 200);

        assert_eq!(
            TypeFormulaParser::new().parse_expression(&expression),
            Err(ParseError::DepthLimitExceeded { limit: DEFAULT_MAX_DEPTH })
        );
    }
}
