use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("cannot build a store with zero rooms")]
    Empty,

    #[error("room #{index} has an empty name")]
    UnnamedRoom { index: usize },

    #[error("duplicate room name {0:?}")]
    DuplicateRoom(String),

    #[error("room {referenced_by:?} lists unknown adjacent room {name:?}")]
    UnknownRoom { name: String, referenced_by: String },

    #[error("room {room:?}: {what} must be positive, got {got}")]
    InvalidSize {
        room: String,
        what: &'static str,
        got:  f64,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
