//! Wire codec shared by the tracker and the peers.
//!
//! Two framings live here:
//!
//! - **Line protocol** (peer <-> tracker): one command per line, fields separated
//!   by single spaces, no escaping. Every reply is an envelope whose first line is
//!   the decimal count of body lines, followed by exactly that many lines.
//! - **File streaming** (peer <-> peer): the requester sends one line holding the
//!   remote path; the responder answers with the file length as an 8-byte
//!   big-endian integer, followed by the raw bytes in 1024-byte chunks. A blank
//!   request line is a no-op.
//!
//! # Example
//!
//! ```rust,ignore
//! use peer_tracker::codec::structs::reply::Reply;
//!
//! let reply = Reply::single("Successful");
//! assert_eq!(reply.encode(), "1\nSuccessful\n");
//! ```

/// Line framing helpers and file-streaming functions.
#[allow(clippy::module_inception)]
pub mod codec;

/// Codec error enumeration.
pub mod enums;

/// Implementation blocks for codec types.
pub mod impls;

/// Reply envelope structure.
pub mod structs;
