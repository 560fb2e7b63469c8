use pp_core::PpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("config parse error: {0}")]
    Parse(String),

    #[error("invalid task parameters: {0}")]
    Config(#[from] PpError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;
