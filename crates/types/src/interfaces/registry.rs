//! The [`AbiRegistry`], root of a parsed contract interface.

use std::{collections::HashSet, path::Path, time::Instant};

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::{
    core::{formula::TypeFormula, parser::TypeFormulaParser},
    error::Error,
    interfaces::{
        document::RawAbi,
        endpoint::{EndpointDefinition, CONSTRUCTOR_NAME},
    },
};

/// A contract interface: its name, optional constructor, endpoints and custom types.
///
/// Loading is all-or-nothing: a single malformed type anywhere in the document aborts the load.
///
/// ```
/// use mxabi_types::AbiRegistry;
/// use serde_json::json;
///
/// let registry = AbiRegistry::from_document(&json!({
///     "name": "Adder",
///     "endpoints": [{ "name": "add", "inputs": [{ "name": "value", "type": "BigUint" }] }]
/// }))
/// .expect("valid document");
///
/// assert_eq!(registry.name, "Adder");
/// assert!(registry.constructor.is_none());
/// assert_eq!(registry.endpoint("add").expect("add exists").inputs[0].type_formula.name(), "BigUint");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbiRegistry {
    /// The contract name.
    pub name: String,
    /// The constructor, present iff the document had a non-null `constructor`.
    pub constructor: Option<EndpointDefinition>,
    /// Endpoints, in document order.
    pub endpoints: Vec<EndpointDefinition>,
    /// Custom types, in document order.
    pub types: Vec<TypeFormula>,
}

impl AbiRegistry {
    /// Builds a registry from a JSON document with the default parser limits.
    pub fn from_document(document: &Value) -> Result<Self, Error> {
        Self::from_document_with(document, &TypeFormulaParser::new())
    }

    /// Builds a registry from a JSON document, parsing every type with `parser`.
    pub fn from_document_with(document: &Value, parser: &TypeFormulaParser) -> Result<Self, Error> {
        let start_time = Instant::now();
        let raw = RawAbi::deserialize(document)
            .map_err(|e| Error::Document(format!("invalid ABI document: {e}")))?;

        let constructor =
            raw.constructor.map(|c| EndpointDefinition::from_raw(c, parser)).transpose()?;
        let endpoints = raw
            .endpoints
            .into_iter()
            .map(|e| EndpointDefinition::from_raw(e, parser))
            .collect::<Result<Vec<_>, Error>>()?;
        let types = raw
            .types
            .iter()
            .map(|expression| {
                parser
                    .parse_expression(expression)
                    .map_err(|source| Error::Parse { expression: expression.clone(), source })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let mut seen = HashSet::new();
        for endpoint in &endpoints {
            if !seen.insert(endpoint.name.as_str()) {
                warn!("ABI '{}' declares endpoint '{}' more than once", raw.name, endpoint.name);
            }
            if endpoint.is_constructor() {
                warn!("ABI '{}' lists '{}' among its endpoints", raw.name, CONSTRUCTOR_NAME);
            }
        }

        debug!(
            "loaded ABI '{}' with {} endpoints and {} types in {:?}",
            raw.name,
            endpoints.len(),
            types.len(),
            start_time.elapsed()
        );

        Ok(Self { name: raw.name, constructor, endpoints, types })
    }

    /// Builds a registry from JSON text.
    pub fn from_json_str(contents: &str) -> Result<Self, Error> {
        Self::from_json_str_with(contents, &TypeFormulaParser::new())
    }

    /// Like [`Self::from_json_str`], parsing every type with `parser`.
    pub fn from_json_str_with(contents: &str, parser: &TypeFormulaParser) -> Result<Self, Error> {
        let document: Value = serde_json::from_str(contents).map_err(Error::Json)?;
        Self::from_document_with(&document, parser)
    }

    /// Reads and parses an ABI file.
    ///
    /// A missing or unreadable file yields [`Error::Io`], invalid JSON yields [`Error::Json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_file_with(path, &TypeFormulaParser::new())
    }

    /// Like [`Self::from_file`], parsing every type with `parser`.
    pub fn from_file_with(path: impl AsRef<Path>, parser: &TypeFormulaParser) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!("reading ABI from '{}'", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str_with(&contents, parser)
    }

    /// Renders the registry as a JSON document. A missing constructor is rendered as `null`.
    pub fn to_document(&self) -> Value {
        json!({
            "name": self.name,
            "constructor": self.constructor.as_ref().map(|c| c.to_document()),
            "endpoints": self.endpoints.iter().map(|e| e.to_document()).collect::<Vec<_>>(),
            "types": self.types.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
        })
    }

    /// Renders the registry as JSON text.
    pub fn to_json_string(&self, pretty: bool) -> Result<String, Error> {
        let document = self.to_document();
        if pretty {
            serde_json::to_string_pretty(&document).map_err(Error::Json)
        } else {
            serde_json::to_string(&document).map_err(Error::Json)
        }
    }

    /// Writes the registry as JSON to `path`, creating parent directories as needed.
    pub fn to_file(&self, path: impl AsRef<Path>, pretty: bool) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json_string(pretty)?)?;
        debug!("wrote ABI '{}' to '{}'", self.name, path.display());
        Ok(())
    }

    /// Finds the first endpoint with the given name.
    pub fn endpoint(&self, name: &str) -> Option<&EndpointDefinition> {
        self.endpoints.iter().find(|e| e.name == name)
    }

    /// Endpoint names, in document order.
    pub fn endpoint_names(&self) -> Vec<&str> {
        self.endpoints.iter().map(|e| e.name.as_str()).collect()
    }
}
