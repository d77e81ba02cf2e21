use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("scroll duration must be greater than zero (got {0} ms)")]
    InvalidDuration(u32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
