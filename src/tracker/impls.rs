//! Implementation blocks for tracker types.

pub mod command;

pub mod command_dispatcher;

pub mod connection_id;

pub mod session_table;

pub mod tracker_server;
