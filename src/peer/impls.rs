//! Implementation blocks for the peer client.

pub mod peer_client;
