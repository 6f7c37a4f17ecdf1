//! The Core module serves as the central integration point for mxabi's functionality, providing
//! access to the ABI model and the tools built on top of it.
//!
//! This module re-exports the public interfaces of the underlying crates, making it easier to use
//! mxabi's capabilities in other projects.

// Re-export all tool-specific modules
pub use mxabi_inspect;
pub use mxabi_types;
