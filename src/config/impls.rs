//! Implementation blocks for configuration types.

pub mod configuration;
