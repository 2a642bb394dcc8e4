//! Common utilities and shared functionality.
//!
//! - Logging setup (`fern` dispatch to stdout with coloured levels)
//! - `CustomError`, the error returned by start-up helpers

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
