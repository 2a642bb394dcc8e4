//! Upload side of the peer: serves raw file bytes to other peers.
//!
//! The server listens on the port the peer announced to the tracker and serves
//! one client at a time. A client sends one line with the path it wants; the
//! server answers with the 8-byte big-endian length and the file contents, then
//! closes the connection. A blank request line is answered with nothing.
//!
//! Shutdown is a watch signal checked while waiting for the next client.

/// Service entry point.
#[allow(clippy::module_inception)]
pub mod file_server;

/// Implementation blocks for the file server.
pub mod impls;

/// File server structure.
pub mod structs;
