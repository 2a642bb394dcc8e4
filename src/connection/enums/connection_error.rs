use thiserror::Error;
use crate::codec::enums::codec_error::CodecError;

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Not yet connected!")]
    NotConnected,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Codec(#[from] CodecError),
}
