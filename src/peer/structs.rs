/// Result of handling one input line.
pub mod line_outcome;

/// Running peer: file server, address refresh, download pool and tracker link.
pub mod peer_client;
