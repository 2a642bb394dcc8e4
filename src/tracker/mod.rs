//! Tracker: session table, command dispatcher and the connection event loop.
//!
//! # Architecture
//!
//! The tracker runs on a single-threaded runtime. One dispatcher task owns the
//! [`Registry`](crate::registry::structs::registry::Registry) and the session
//! table outright and consumes a single event queue:
//!
//! ```text
//!  peer socket ──► connection task ──┐
//!  peer socket ──► connection task ──┼──► mpsc<TrackerEvent> ──► CommandDispatcher
//!  peer socket ──► connection task ──┘          ▲                      │
//!                       ▲                       │ oneshot reply        │
//!                       └───────────────────────┴──────────────────────┘
//! ```
//!
//! Connection tasks only move bytes: each read (at most 512 bytes) is taken as one
//! whole command, handed to the dispatcher, and the framed reply is written back
//! before the next read. A read of zero bytes or a transport error closes the
//! channel, which drops the bound user's announcements.
//!
//! # Session states
//!
//! `Unbound` -> `Bound(username)` on the first `register`/`unregister`; a bound
//! channel rejects privileged commands naming anybody else. The channel ends on
//! `disconnect` or on transport close.
//!
//! # Replies
//!
//! Every reply is framed as a line count followed by the body lines.
//!
//! | Command | Success | Failure |
//! |---|---|---|
//! | `connect <user>` | `Successful` (name free) | `Unsuccessful` (name taken) |
//! | `register <port> <user> <file>+` | `File(s) successfully registered!` | `Could not retrieve port.`, `This session is associated with another user.`, `<user> has already registered from another address!` |
//! | `unregister <user> <file>+` | `File(s) successfully unregistered!` | `This session is associated with another user.`, `<user> is not registered!` |
//! | `list-files` | one `<user> : <file>` line each | `There are no files registered!` |
//! | `list-addresses` | one `<user> - <host:port>` line each | `There are no addresses available!` |
//! | `download <user> <path>` | `download <host:port> <user> <path>` | `The specified file is not registered!` |
//! | `disconnect` | `Successfully disconnected!` | `This session is not associated with any user!` (channel never bound), `<user> is not registered!` (bound name was never registered) |
//! | anything else | | `Unknown command!` |
//!
//! `disconnect` closes the channel after its reply, whatever the outcome.

/// Command, session state and event enumerations.
pub mod enums;

/// Implementation blocks for tracker types.
pub mod impls;

/// Tracker data structures.
pub mod structs;

/// Tracker service entry point and reply texts.
#[allow(clippy::module_inception)]
pub mod tracker;
