//! Implementation blocks for codec types.

/// Reply construction and encoding.
pub mod reply;
