pub mod bitboard;
pub mod board;
pub mod error;
#[cfg(feature = "logging")]
pub mod logger;
pub mod moves;
pub mod search;
pub mod square;
pub mod status;

pub use board::{Color, Piece, PieceKind, Position};
pub use error::ChessError;
pub use moves::Move;
pub use square::Square;
