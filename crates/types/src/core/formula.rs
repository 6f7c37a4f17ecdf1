//! The parsed tree form of a (possibly generic) type name.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{core::parser::TypeFormulaParser, error::ParseError};

/// A type name together with its ordered type parameters, for example `List<u64>`.
///
/// Formulas are immutable once built. Two formulas are equal when their names are equal and their
/// type parameters are equal element-wise, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeFormula {
    name: String,
    type_parameters: Vec<TypeFormula>,
}

impl TypeFormula {
    /// Creates a formula from a name and its type parameters.
    pub fn new(name: impl Into<String>, type_parameters: Vec<TypeFormula>) -> Self {
        Self { name: name.into(), type_parameters }
    }

    /// Creates a formula without type parameters.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Parses a type expression with the default parser limits.
    ///
    /// ```
    /// use mxabi_types::TypeFormula;
    ///
    /// let formula = TypeFormula::from_expression("Option<List<u64>>").expect("valid expression");
    /// assert_eq!(formula.name(), "Option");
    /// assert_eq!(formula.type_parameters()[0].to_string(), "List<u64>");
    /// ```
    pub fn from_expression(expression: &str) -> Result<Self, ParseError> {
        TypeFormulaParser::new().parse_expression(expression)
    }

    /// The name of the type, without its parameters.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type parameters, in declaration order.
    pub fn type_parameters(&self) -> &[TypeFormula] {
        &self.type_parameters
    }

    /// Whether the type has at least one type parameter.
    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }

    /// The nesting depth of the formula. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.type_parameters.iter().map(|p| p.depth() + 1).max().unwrap_or(0)
    }
}

impl Display for TypeFormula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if self.type_parameters.is_empty() {
            return Ok(());
        }

        write!(f, "<")?;
        for (i, parameter) in self.type_parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{parameter}")?;
        }
        write!(f, ">")
    }
}

impl FromStr for TypeFormula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_expression(s)
    }
}

impl Serialize for TypeFormula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeFormula {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let expression = String::deserialize(deserializer)?;
        TypeFormula::from_expression(&expression).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_leaf() {
        assert_eq!(TypeFormula::leaf("i64").to_string(), "i64");
    }

    #[test]
    fn test_display_nested() {
        let formula = TypeFormula::new(
            "MultiResultVec",
            vec![TypeFormula::new(
                "MultiResult2",
                vec![TypeFormula::leaf("Address"), TypeFormula::leaf("u64")],
            )],
        );
        assert_eq!(formula.to_string(), "MultiResultVec<MultiResult2<Address, u64>>");
    }

    #[test]
    fn test_equality_is_structural_and_ordered() {
        let a = TypeFormula::new("tuple2", vec![TypeFormula::leaf("i32"), TypeFormula::leaf("u8")]);
        let b = TypeFormula::new("tuple2", vec![TypeFormula::leaf("i32"), TypeFormula::leaf("u8")]);
        let c = TypeFormula::new("tuple2", vec![TypeFormula::leaf("u8"), TypeFormula::leaf("i32")]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(TypeFormula::leaf("List"), TypeFormula::new("List", vec![TypeFormula::leaf("u8")]));
    }

    #[test]
    fn test_depth() {
        assert_eq!(TypeFormula::leaf("u8").depth(), 0);
        let formula: TypeFormula = "tuple3<i32, bytes, Option<List<i64>>>".parse().expect("valid");
        assert_eq!(formula.depth(), 3);
        assert!(formula.is_generic());
    }

    #[test]
    fn test_serde_as_string() {
        let formula: TypeFormula = "Option<i64>".parse().expect("valid");
        let json = serde_json::to_string(&formula).expect("serializable");
        assert_eq!(json, "\"Option<i64>\"");

        let back: TypeFormula = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, formula);

        assert!(serde_json::from_str::<TypeFormula>("\"Option<\"").is_err());
    }
}
