//! Type formulas, endpoint metadata and the ABI registry.
//!
//! A contract interface is described by a JSON document whose parameter types are written as
//! generic type expressions, for example `MultiResultVec<MultiResult2<Address, u64>>`. This crate
//! tokenizes and parses those expressions into [`TypeFormula`] trees, and loads whole documents
//! into an [`AbiRegistry`] that renders back to the same document.

/// Error types for the types module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use crate::core::{
    formula::TypeFormula,
    parser::{ParserLimits, TypeFormulaParser, DEFAULT_MAX_DEPTH, DEFAULT_MAX_TOKENS},
    tokenize::{tokenize, Token, BEGIN_TYPE_PARAMETERS, COMMA, END_TYPE_PARAMETERS},
};
pub use error::{Error, ParseError};
pub use crate::interfaces::{
    document::{DESCRIPTION_PLACEHOLDER, NAME_PLACEHOLDER},
    endpoint::{
        EndpointDefinition, EndpointModifiers, EndpointParameterDefinition, ANY_TOKEN,
        CONSTRUCTOR_NAME, READONLY_MUTABILITY,
    },
    registry::AbiRegistry,
};
