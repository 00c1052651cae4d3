use thiserror::Error;

use crate::types::Cell;

/// Errors raised while building boards or parsing coordinates.
///
/// Rule inputs never produce these: an illegal selection is reported as
/// [`crate::Outcome::Rejected`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckersError {
    #[error("invalid board diagram (line {line}): {reason}")]
    InvalidDiagram { line: usize, reason: String },

    #[error("piece placed on light cell {0}")]
    PieceOnLightSquare(Cell),

    #[error("invalid cell '{0}': expected two coordinates in 0..=7")]
    InvalidCell(String),
}

pub type Result<T> = std::result::Result<T, CheckersError>;
