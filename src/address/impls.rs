//! Implementation blocks for the address cache.

pub mod address_cache;
