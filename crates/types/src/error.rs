//! Error types for the types module

/// Reasons a type expression can be rejected by the
/// [`TypeFormulaParser`](crate::TypeFormulaParser).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The expression contained no tokens at all.
    #[error("empty type expression")]
    EmptyExpression,
    /// A `>` was found without a matching `<`.
    #[error("unmatched '>' in type expression")]
    UnmatchedEnd,
    /// A `<` was not preceded by a type name.
    #[error("type parameters are not preceded by a type name")]
    MissingTypeName,
    /// The expression ended while a `<` was still open.
    #[error("unclosed type parameter list")]
    UnclosedParameters,
    /// The expression reduced to more than one type.
    #[error("expected a single type, found {0}")]
    TrailingEntries(usize),
    /// The expression nests type parameters deeper than allowed.
    #[error("type parameters nested deeper than {limit} levels")]
    DepthLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
    /// The expression has more tokens than allowed.
    #[error("type expression has {found} tokens, the limit is {limit}")]
    TokenLimitExceeded {
        /// The configured maximum token count.
        limit: usize,
        /// The number of tokens in the expression.
        found: usize,
    },
}

/// Error type for the types module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A type expression inside a document could not be parsed.
    #[error("Parse error in `{expression}`: {source}")]
    Parse {
        /// The offending type expression.
        expression: String,
        /// The underlying parser failure.
        #[source]
        source: ParseError,
    },
    /// The document does not have the expected structure, e.g. a parameter without `type`.
    #[error("Document error: {0}")]
    Document(String),
    /// The ABI file could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The ABI file is not valid JSON, or the registry could not be rendered as JSON.
    #[error("JSON error: {0}")]
    Json(#[source] serde_json::Error),
}

impl Error {
    /// Whether this error comes from a malformed type expression.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Whether this error comes from a structurally invalid document.
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }

    /// Whether this error comes from reading, writing or decoding an ABI file.
    pub fn is_resource_error(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::Parse {
            expression: "Foo<".to_string(),
            source: ParseError::UnclosedParameters,
        };
        assert_eq!(err.to_string(), "Parse error in `Foo<`: unclosed type parameter list");
        assert!(err.is_parse_error());
        assert!(!err.is_document_error());
        assert!(!err.is_resource_error());
    }

    #[test]
    fn test_limit_error_display() {
        let err = ParseError::TokenLimitExceeded { limit: 4, found: 7 };
        assert_eq!(err.to_string(), "type expression has 7 tokens, the limit is 4");

        let err = ParseError::DepthLimitExceeded { limit: 2 };
        assert_eq!(err.to_string(), "type parameters nested deeper than 2 levels");
    }

    #[test]
    fn test_error_classification() {
        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert!(io.is_resource_error());

        let decode = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        assert!(Error::Json(decode).is_resource_error());

        let document = Error::Document("missing field `type`".to_string());
        assert!(document.is_document_error());
        assert!(!document.is_resource_error());
    }
}
