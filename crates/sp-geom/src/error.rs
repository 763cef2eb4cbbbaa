//! Geometry error type.

use thiserror::Error;

/// Errors produced by `sp-geom`.
#[derive(Debug, Error)]
pub enum GeomError {
    #[error("polygon needs at least 3 distinct vertices, got {got}")]
    TooFewVertices { got: usize },

    #[error("cut produced a degenerate piece (fewer than 3 distinct vertices)")]
    DegenerateCut,
}

pub type GeomResult<T> = Result<T, GeomError>;
