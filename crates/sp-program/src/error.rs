use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("programme parse error: {0}")]
    Parse(String),

    #[error("duplicate room name {0:?}")]
    DuplicateRoom(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProgramResult<T> = Result<T, ProgramError>;
