//! In-memory registry of users, their addresses and their announced files.
//!
//! The registry is the tracker-side source of truth. It is owned outright by the
//! tracker's dispatcher task, so it carries no internal locking: every mutation
//! happens on that one task.
//!
//! # Rules
//!
//! - A username is bound to exactly one `host:port` for its lifetime. A second
//!   `register` from another address is rejected and changes nothing.
//! - Registering again from the same address unions the file sets.
//! - Unregistering files that are not present is a no-op.
//! - `find_file_owner` returns the first-registered user announcing the path.

/// Registry error enumeration.
pub mod enums;

/// Implementation blocks for the registry and user records.
pub mod impls;

/// Registry and user record structures.
pub mod structs;
