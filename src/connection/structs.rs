/// Serialized request/reply channel to the tracker.
pub mod tracker_connection;
