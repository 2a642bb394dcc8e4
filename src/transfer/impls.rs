//! Implementation blocks for transfer types.

pub mod download_request;

pub mod transfer_engine;

pub mod transfer_task;
