//! The Inspect module loads contract ABI files and type expressions, and renders them in a
//! readable form.
//!
//! It is the operational layer on top of `mxabi-types`: it applies the configured parser limits,
//! reports what was loaded, and produces the normalized document for output.

/// Error types for the inspect module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use crate::core::{formula, inspect, FormulaResult, InspectResult};
pub use error::Error;
pub use interfaces::{FormulaArgs, FormulaArgsBuilder, InspectArgs, InspectArgsBuilder};
