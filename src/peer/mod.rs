//! Peer client: wires the peer-side components together.
//!
//! A peer first connects to the tracker and claims its username with
//! `connect <user>`. [`PeerClient::start`](structs::peer_client::PeerClient)
//! then binds the file server, starts the address refresh task and the download
//! pool, all sharing the one tracker connection.
//!
//! Lines typed by the user go through `handle_line`:
//!
//! | Input | Action |
//! |---|---|
//! | `register <file>+` | sent as `register <port> <user> <file>+` |
//! | `unregister <file>+` | sent as `unregister <user> <file>+` |
//! | `download <user> <path> [<dir>]` | queued on the download pool |
//! | `disconnect` | orderly stop |
//! | anything else | forwarded to the tracker as is |

/// Command rewriting helpers and reply texts.
#[allow(clippy::module_inception)]
pub mod peer;

/// Implementation blocks for the peer client.
pub mod impls;

/// Peer client structures.
pub mod structs;
