//! Implementation blocks for the file server.

pub mod peer_file_server;
