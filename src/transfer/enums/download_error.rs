use thiserror::Error;
use crate::address::enums::address_error::AddressError;
use crate::codec::enums::codec_error::CodecError;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Unknown command!")]
    MalformedCommand,

    #[error("{0}")]
    Address(#[from] AddressError),

    #[error("Corrupted address! {0}")]
    CorruptedAddress(String),

    #[error("File {0} already exists!")]
    FileExists(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transfer failed: {0}")]
    Transfer(#[from] CodecError),

    #[error("The download service is shut down!")]
    ShutDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_command_display() {
        assert_eq!(format!("{}", DownloadError::MalformedCommand), "Unknown command!");
    }

    #[test]
    fn test_address_error_is_transparent() {
        let error: DownloadError = AddressError::UserNotFound.into();
        assert_eq!(format!("{}", error), "User not found!");
    }

    #[test]
    fn test_file_exists_display() {
        let error = DownloadError::FileExists("downloads/photo.jpg".to_string());
        assert_eq!(format!("{}", error), "File downloads/photo.jpg already exists!");
    }
}
