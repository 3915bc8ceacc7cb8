use thiserror::Error;
use uw_core::UwError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] UwError),

    #[error("supplied field has {got} nodes but the configuration asks for {expected}")]
    FieldSizeMismatch { expected: usize, got: usize },
}

pub type SimResult<T> = Result<T, SimError>;
