//! Subdivision error type.

use thiserror::Error;

use crate::splitter::SplitStep;

/// Errors produced by `sp-subdiv`.
#[derive(Debug, Error)]
pub enum SubdivError {
    /// The cut line crossed the boundary fewer than twice, so there is
    /// nothing to split.  Happens when the cut runs entirely along an edge
    /// of the piece.
    #[error("cut {step} crossed the boundary {hits} time(s), need at least 2")]
    CutMissedBoundary { step: SplitStep, hits: usize },

    /// The piece is non-convex and no pair of consecutive crossings yields a
    /// chord that splits it into exactly two pieces.
    #[error("cut {step} cannot split this boundary into exactly two pieces")]
    NoTwoPieceCut { step: SplitStep },

    /// Split params address a fraction of the piece's extent and must stay
    /// inside `[0, 1]`.
    #[error("cut {step} is outside the piece (params must be in [0, 1])")]
    ParamOutOfRange { step: SplitStep },

    #[error(transparent)]
    Geom(#[from] sp_geom::GeomError),
}

pub type SubdivResult<T> = Result<T, SubdivError>;
