//! Tracker data structures.

/// The dispatcher owning the registry and the session table.
pub mod command_dispatcher;

/// Identity of one accepted peer channel.
pub mod connection_id;

/// Reply plus the decision whether to close the channel.
pub mod dispatch_outcome;

/// Channel to username bindings.
pub mod session_table;

/// Listening socket of the tracker.
pub mod tracker_server;
