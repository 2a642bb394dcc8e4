//! # Peer Tracker
//!
//! A peer-to-peer file sharing coordinator: a central tracker that records which
//! files each peer holds and where it listens, and a peer client that turns those
//! announcements into direct peer-to-peer transfers. The tracker never moves file
//! bytes.
//!
//! ## Protocol
//!
//! Peers talk to the tracker over one TCP connection, one command per line:
//!
//! ```text
//! connect <user>
//! register <port> <user> <file>+
//! unregister <user> <file>+
//! list-files
//! list-addresses
//! download <user> <path>
//! disconnect
//! ```
//!
//! Every reply is `<line count>\n` followed by that many lines. Files move
//! between peers on a separate connection: the requester sends the path, the
//! owner answers with an 8-byte big-endian length and the raw bytes.
//!
//! ## Modules
//!
//! - [`codec`] - line framing, reply envelopes and file streaming
//! - [`registry`] - the tracker's users, addresses and files
//! - [`tracker`] - sessions, command dispatch and the tracker event loop
//! - [`connection`] - the peer's serialized link to the tracker
//! - [`address`] - the peer's refreshed address cache
//! - [`transfer`] - the peer's download worker pool
//! - [`file_server`] - the peer's upload listener
//! - [`peer`] - the peer client wiring it all together
//! - [`config`] - configuration management and TOML parsing
//! - [`common`] - logging setup and shared helpers
//! - [`structs`] - CLI argument parsing

/// Peer-side address cache and its refresh task.
pub mod address;

/// Logging setup and shared helpers.
pub mod common;

/// Wire codec shared by tracker and peers.
///
/// Line requests, counted reply envelopes and the length-prefixed file stream
/// used between peers.
pub mod codec;

/// Configuration management module.
pub mod config;

/// Peer-side link to the tracker.
pub mod connection;

/// Peer file server answering other peers' downloads.
pub mod file_server;

/// Peer client actions.
pub mod peer;

/// Tracker registry of users, addresses and files.
pub mod registry;

/// CLI argument parsing.
pub mod structs;

/// Tracker sessions, dispatcher and event loop.
///
/// Runs on one thread: a single dispatcher task owns all tracker state and
/// answers the connection tasks through a queue.
pub mod tracker;

/// Download worker pool.
pub mod transfer;
