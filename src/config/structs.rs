//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Peer settings (tracker address, cache file, downloads, worker pool).
pub mod peer_config;

/// Tracker settings (listen address).
pub mod tracker_config;
