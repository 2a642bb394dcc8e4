//! Implementation blocks for registry types.

pub mod registry;

pub mod user_record;
