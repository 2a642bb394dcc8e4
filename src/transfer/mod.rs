//! Download side of the peer: the transfer worker pool.
//!
//! A `download <user> <remote path> [<local dir>]` command is checked and
//! resolved on the caller's task: the user's address comes from the
//! [`AddressCache`](crate::address::structs::address_cache::AddressCache), the
//! destination directory is created, and a same-named file at the destination
//! rejects the command. The resulting [`TransferTask`](structs::transfer_task::TransferTask)
//! is queued for a fixed pool of workers.
//!
//! A worker opens its own connection to the owning peer, streams the file into
//! place and then announces the new copy to the tracker under the local user.
//! Failures are logged and end only that task; a partially written file is
//! removed.
//!
//! Shutdown stops new submissions, lets the workers drain the queue for a grace
//! period and aborts whatever is still running after it.

/// Command parsing helpers.
#[allow(clippy::module_inception)]
pub mod transfer;

/// Download error enumeration.
pub mod enums;

/// Implementation blocks for transfer types.
pub mod impls;

/// Transfer task, request and engine structures.
pub mod structs;
