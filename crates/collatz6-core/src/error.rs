use thiserror::Error;

#[derive(Debug, Error)]
pub enum Collatz6Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("arithmetic overflow applying the rim transform to {value}")]
    Overflow { value: String },

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Collatz6Error>;
