//! Codec data structures.

/// Reply envelope: the body lines of a tracker answer.
pub mod reply;
