use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RegistryError {
    #[error("{0} has already registered from another address!")]
    InvalidUser(String),

    #[error("{0} is not registered!")]
    UserNotFound(String),

    #[error("The specified file is not registered!")]
    FileNotFound(String),
}
