use thiserror::Error;
use crate::connection::enums::connection_error::ConnectionError;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("User not found!")]
    UserNotFound,

    #[error("{0}")]
    Connection(#[from] ConnectionError),

    #[error("Address file error: {0}")]
    Io(#[from] std::io::Error),
}
