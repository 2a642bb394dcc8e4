//! Registry data structures.

/// Username to record mapping.
pub mod registry;

/// Address and file set announced by one user.
pub mod user_record;
