use thiserror::Error;

/// Errors raised at the edges of the engine. Move legality is never an error:
/// illegal moves simply do not appear among the legal destinations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("board layout must describe {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    #[error("invalid cell stride: {0}")]
    InvalidStride(usize),

    #[error("invalid square: {0}")]
    InvalidSquare(String),
}
