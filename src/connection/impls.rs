//! Implementation blocks for the tracker connection.

pub mod tracker_connection;
