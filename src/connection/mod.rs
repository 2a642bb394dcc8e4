//! Peer-side link to the tracker.
//!
//! One TCP connection carries every request the peer makes: the foreground
//! commands, the address refresh task and the transfer workers all share it.
//! `send_message` holds the link's lock for the whole request/reply exchange, so
//! at most one request is ever in flight and every caller gets its own reply.

/// Connection error enumeration.
pub mod enums;

/// Implementation blocks for the tracker connection.
pub mod impls;

/// Tracker connection structure.
pub mod structs;

/// Unit tests for the tracker connection.
pub mod tests;
