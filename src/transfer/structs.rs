/// Parsed `download` command.
pub mod download_request;

/// Worker pool executing transfer tasks.
pub mod transfer_engine;

/// One resolved download, ready for a worker.
pub mod transfer_task;
