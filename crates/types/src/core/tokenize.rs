//! Tokenizer for type expressions

use std::fmt::{Display, Formatter};

/// Opens a type parameter list.
pub const BEGIN_TYPE_PARAMETERS: char = '<';
/// Closes a type parameter list.
pub const END_TYPE_PARAMETERS: char = '>';
/// Separates sibling type parameters.
pub const COMMA: char = ',';

/// A token represents a single unit of a type expression
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    /// A type name, for example, "u64" or "USDC-c76f1f"
    Identifier(String),
    /// The "<" symbol
    BeginParameters,
    /// The ">" symbol
    EndParameters,
    /// The "," symbol
    Comma,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{name}"),
            Token::BeginParameters => write!(f, "{BEGIN_TYPE_PARAMETERS}"),
            Token::EndParameters => write!(f, "{END_TYPE_PARAMETERS}"),
            Token::Comma => write!(f, "{COMMA}"),
        }
    }
}

impl Token {
    /// Returns the punctuation token for the given character, if any.
    fn punctuation(ch: char) -> Option<Token> {
        match ch {
            BEGIN_TYPE_PARAMETERS => Some(Token::BeginParameters),
            END_TYPE_PARAMETERS => Some(Token::EndParameters),
            COMMA => Some(Token::Comma),
            _ => None,
        }
    }
}

/// Tokenizes a type expression into a vector of tokens
///
/// Rules:
/// - Whitespace is discarded, and does not end the identifier being read
/// - "<", ">" and "," are treated as their own tokens
/// - Every other character is part of an identifier
/// - Tokenization never fails, structure is checked by the parser
///
/// ```
/// use mxabi_types::{tokenize, Token};
///
/// let tokens = tokenize("List<u64>");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Identifier("List".to_string()),
///         Token::BeginParameters,
///         Token::Identifier("u64".to_string()),
///         Token::EndParameters,
///     ]
/// );
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in expression.chars() {
        if ch.is_whitespace() {
            continue;
        }

        match Token::punctuation(ch) {
            Some(token) => {
                if !current.is_empty() {
                    tokens.push(Token::Identifier(std::mem::take(&mut current)));
                }
                tokens.push(token);
            }
            None => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(Token::Identifier(current));
    }

    tokens
}
