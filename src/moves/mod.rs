pub mod attacks;
pub mod execute;
pub mod movegen;
pub mod perft;
pub mod square_control;
pub mod types;

pub use execute::apply_move;
pub use movegen::{generate_legal, has_legal_move, legal_moves};
pub use square_control::{in_check, is_legal_move, legal_destinations};
pub use types::{Move, MoveBuffer};
