use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Could not read {path}: {source}")]
    Read { path: String, source: std::io::Error },

    #[error("Could not parse {path}: {source}")]
    Parse { path: String, source: toml::de::Error },

    #[error("Could not write {path}: {source}")]
    Write { path: String, source: std::io::Error },
}
