/// Failures of registry lookups and mutations.
pub mod registry_error;
