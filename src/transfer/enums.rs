/// Errors raised while submitting or running a download.
pub mod download_error;
