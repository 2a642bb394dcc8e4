/// Parsed tracker command.
pub mod command;

/// Binding state of one channel.
pub mod session_state;

/// Events flowing from connection tasks to the dispatcher.
pub mod tracker_event;
