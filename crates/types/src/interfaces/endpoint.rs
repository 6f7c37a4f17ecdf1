//! Metadata describing callable contract functions.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    core::{formula::TypeFormula, parser::TypeFormulaParser},
    error::Error,
    interfaces::document::{default_description, default_name, RawEndpoint, RawParameter},
};

/// The literal name that marks an endpoint as the contract constructor.
pub const CONSTRUCTOR_NAME: &str = "constructor";
/// Mutability of endpoints that do not modify contract state.
pub const READONLY_MUTABILITY: &str = "readonly";
/// Entry of `payableInTokens` that accepts any token.
pub const ANY_TOKEN: &str = "*";

/// A single input or output of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointParameterDefinition {
    /// The parameter name, `"?"` when the document has none.
    pub name: String,
    /// A human readable description, `"N/A"` when the document has none.
    pub description: String,
    /// The parsed type of the parameter.
    pub type_formula: TypeFormula,
}

impl EndpointParameterDefinition {
    /// Creates an unnamed, undocumented parameter of the given type.
    pub fn new(type_formula: TypeFormula) -> Self {
        Self { name: default_name(), description: default_description(), type_formula }
    }

    /// Sets the name of the parameter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description of the parameter.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds a parameter from its document object. The `type` key is mandatory.
    ///
    /// ```
    /// use mxabi_types::EndpointParameterDefinition;
    /// use serde_json::json;
    ///
    /// let parameter = EndpointParameterDefinition::from_document(&json!({ "type": "List<u64>" }))
    ///     .expect("valid parameter");
    /// assert_eq!(parameter.name, "?");
    /// assert_eq!(parameter.type_formula.to_string(), "List<u64>");
    /// ```
    pub fn from_document(document: &Value) -> Result<Self, Error> {
        Self::from_document_with(document, &TypeFormulaParser::new())
    }

    /// Like [`Self::from_document`], parsing the type with the given parser.
    pub fn from_document_with(document: &Value, parser: &TypeFormulaParser) -> Result<Self, Error> {
        let raw = RawParameter::deserialize(document)
            .map_err(|e| Error::Document(format!("invalid parameter: {e}")))?;
        Self::from_raw(raw, parser)
    }

    pub(crate) fn from_raw(raw: RawParameter, parser: &TypeFormulaParser) -> Result<Self, Error> {
        let type_formula = parser
            .parse_expression(&raw.type_expression)
            .map_err(|source| Error::Parse { expression: raw.type_expression.clone(), source })?;

        Ok(Self { name: raw.name, description: raw.description, type_formula })
    }

    /// Renders the parameter as a document object.
    pub fn to_document(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "type": self.type_formula.to_string(),
        })
    }
}

/// How an endpoint may be called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointModifiers {
    /// State mutation classification, e.g. `"readonly"` or `"mutable"`.
    pub mutability: String,
    /// Token identifiers the endpoint accepts value in.
    pub payable_in_tokens: Vec<String>,
}

impl EndpointModifiers {
    /// Creates modifiers from a mutability and the accepted tokens.
    pub fn new(mutability: impl Into<String>, payable_in_tokens: Vec<String>) -> Self {
        Self { mutability: mutability.into(), payable_in_tokens }
    }

    /// Whether the endpoint is declared as not modifying contract state.
    pub fn is_readonly(&self) -> bool {
        self.mutability == READONLY_MUTABILITY
    }

    /// Whether the endpoint accepts value in at least one token.
    pub fn is_payable(&self) -> bool {
        !self.payable_in_tokens.is_empty()
    }

    /// Whether the endpoint accepts value in `token`, either explicitly or through `"*"`.
    ///
    /// ```
    /// use mxabi_types::EndpointModifiers;
    ///
    /// let modifiers = EndpointModifiers::new("mutable", vec!["EGLD".to_string()]);
    /// assert!(modifiers.is_payable_in("EGLD"));
    /// assert!(!modifiers.is_payable_in("USDC-c76f1f"));
    /// ```
    pub fn is_payable_in(&self, token: &str) -> bool {
        self.payable_in_tokens.iter().any(|t| t == token || t == ANY_TOKEN)
    }
}

/// A callable contract function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDefinition {
    /// The endpoint name.
    pub name: String,
    /// A human readable description.
    pub description: String,
    /// Input parameters, in call order.
    pub inputs: Vec<EndpointParameterDefinition>,
    /// Output parameters, in return order.
    pub outputs: Vec<EndpointParameterDefinition>,
    /// Mutability and payable tokens.
    pub modifiers: EndpointModifiers,
}

impl EndpointDefinition {
    /// Creates an endpoint without parameters and with default modifiers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: default_description(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            modifiers: EndpointModifiers::default(),
        }
    }

    /// Whether this endpoint is the contract constructor. The match is exact and
    /// case-sensitive.
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }

    /// Builds an endpoint from its document object.
    pub fn from_document(document: &Value) -> Result<Self, Error> {
        Self::from_document_with(document, &TypeFormulaParser::new())
    }

    /// Like [`Self::from_document`], parsing types with the given parser.
    pub fn from_document_with(document: &Value, parser: &TypeFormulaParser) -> Result<Self, Error> {
        let raw = RawEndpoint::deserialize(document)
            .map_err(|e| Error::Document(format!("invalid endpoint: {e}")))?;
        Self::from_raw(raw, parser)
    }

    pub(crate) fn from_raw(raw: RawEndpoint, parser: &TypeFormulaParser) -> Result<Self, Error> {
        let parse_all = |parameters: Vec<RawParameter>| {
            parameters
                .into_iter()
                .map(|p| EndpointParameterDefinition::from_raw(p, parser))
                .collect::<Result<Vec<_>, Error>>()
        };

        let inputs = parse_all(raw.inputs)?;
        let outputs = parse_all(raw.outputs)?;
        debug!("parsed endpoint '{}' ({} inputs, {} outputs)", raw.name, inputs.len(), outputs.len());

        Ok(Self {
            name: raw.name,
            description: raw.description,
            inputs,
            outputs,
            modifiers: EndpointModifiers::new(raw.mutability, raw.payable_in_tokens),
        })
    }

    /// Renders the endpoint as a document object. Modifiers are flattened into the endpoint
    /// object.
    pub fn to_document(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputs": self.inputs.iter().map(|p| p.to_document()).collect::<Vec<_>>(),
            "outputs": self.outputs.iter().map(|p| p.to_document()).collect::<Vec<_>>(),
            "mutability": self.modifiers.mutability,
            "payableInTokens": self.modifiers.payable_in_tokens,
        })
    }

    /// A one-line signature, e.g. `add(value: BigUint)`.
    pub fn signature(&self) -> String {
        let inputs = self
            .inputs
            .iter()
            .map(|p| format!("{}: {}", p.name, p.type_formula))
            .collect::<Vec<_>>()
            .join(", ");

        match self.outputs.as_slice() {
            [] => format!("{}({inputs})", self.name),
            [output] => format!("{}({inputs}) -> {}", self.name, output.type_formula),
            outputs => format!(
                "{}({inputs}) -> ({})",
                self.name,
                outputs.iter().map(|p| p.type_formula.to_string()).collect::<Vec<_>>().join(", ")
            ),
        }
    }
}
