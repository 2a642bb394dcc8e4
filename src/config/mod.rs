//! Configuration management module.
//!
//! The configuration lives in a TOML file (`config.toml` by default) with one
//! table per role:
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **tracker**: the address the tracker listens on
//! - **peer**: where the tracker is, where the address cache and downloads go,
//!   the size of the download pool and the refresh and shutdown timings
//!
//! # Example
//!
//! ```rust,ignore
//! use peer_tracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! println!("{}", config.tracker.bind_address);
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
