/// Message-only error used during start-up.
pub mod custom_error;
