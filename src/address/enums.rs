/// Errors raised while refreshing or reading the address cache.
pub mod address_error;
