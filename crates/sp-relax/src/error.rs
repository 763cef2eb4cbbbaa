use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelaxError {
    #[error("relaxation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type RelaxResult<T> = Result<T, RelaxError>;
