//! Common utilities used across the mxabi codebase.
//!
//! This crate provides shared functionality for the mxabi toolkit, such as file system helpers
//! and the location of the mxabi data directory.

/// General utility functions and types for common tasks.
pub mod utils;
