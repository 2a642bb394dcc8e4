//! Peer-side cache of the tracker's username to address table.
//!
//! The cache lives in a flat text file of `<username> - <host:port>` lines. A
//! background task refreshes it from `list-addresses` every interval and rewrites
//! the file in full. The file sits behind one lock shared by the refresher and
//! every reader, so a lookup never sees a half-written store.
//!
//! The refresh task stops on the shutdown signal, or on the first tracker or
//! file failure, which it logs. It does not restart itself.

/// Refresh task entry point.
#[allow(clippy::module_inception)]
pub mod address;

/// Address error enumeration.
pub mod enums;

/// Implementation blocks for the address cache.
pub mod impls;

/// Address cache structure.
pub mod structs;

/// Unit tests for the address cache.
pub mod tests;
