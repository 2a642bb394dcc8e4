/// Errors raised by the link to the tracker.
pub mod connection_error;
