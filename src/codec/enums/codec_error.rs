use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed line count: {0:?}")]
    MalformedCount(String),

    #[error("Stream ended before the full message was received")]
    UnexpectedEof,
}
