// src/board/layout.rs
// Adapter from an externally owned 8x8 cell layout to a Position.

use super::{PieceKind, Position};
use crate::error::ChessError;
use crate::square::Square;
use tracing::debug;

const CELLS: usize = 64;

/// Maps one external cell to the piece standing on it.
///
/// Implemented by the embedding application; closures `Fn(&Cell) ->
/// Option<PieceKind>` qualify directly. Output is trusted as-is.
pub trait Classify<Cell: ?Sized> {
    fn classify(&self, cell: &Cell) -> Option<PieceKind>;
}

impl<Cell: ?Sized, F> Classify<Cell> for F
where
    F: Fn(&Cell) -> Option<PieceKind>,
{
    #[inline(always)]
    fn classify(&self, cell: &Cell) -> Option<PieceKind> {
        self(cell)
    }
}

/// Order in which the 64 cells walk the ranks. Files always run a..h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankOrder {
    /// First cell is a8, as a board is printed.
    #[default]
    EighthFirst,
    /// First cell is a1.
    FirstFirst,
}

impl RankOrder {
    #[inline(always)]
    fn square_of(self, cell_index: usize) -> Square {
        let row = (cell_index / 8) as u8;
        let file = (cell_index % 8) as u8;
        let rank = match self {
            RankOrder::EighthFirst => 7 - row,
            RankOrder::FirstFirst => row,
        };
        Square::from_coords(file, rank)
    }
}

// O(1) glyph -> piece map. Uppercase = White, lowercase = Black.
const CHAR_TO_KIND: [Option<PieceKind>; 128] = {
    let mut table: [Option<PieceKind>; 128] = [None; 128];

    table['P' as usize] = Some(PieceKind::WhitePawn);
    table['N' as usize] = Some(PieceKind::WhiteKnight);
    table['B' as usize] = Some(PieceKind::WhiteBishop);
    table['R' as usize] = Some(PieceKind::WhiteRook);
    table['Q' as usize] = Some(PieceKind::WhiteQueen);
    table['K' as usize] = Some(PieceKind::WhiteKing);

    table['p' as usize] = Some(PieceKind::BlackPawn);
    table['n' as usize] = Some(PieceKind::BlackKnight);
    table['b' as usize] = Some(PieceKind::BlackBishop);
    table['r' as usize] = Some(PieceKind::BlackRook);
    table['q' as usize] = Some(PieceKind::BlackQueen);
    table['k' as usize] = Some(PieceKind::BlackKing);

    table
};

/// Classifier for standard piece letters; any other glyph is an empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterClassifier;

impl Classify<u8> for LetterClassifier {
    #[inline(always)]
    fn classify(&self, cell: &u8) -> Option<PieceKind> {
        CHAR_TO_KIND.get(*cell as usize).copied().flatten()
    }
}

impl Classify<char> for LetterClassifier {
    #[inline(always)]
    fn classify(&self, cell: &char) -> Option<PieceKind> {
        CHAR_TO_KIND.get(*cell as usize).copied().flatten()
    }
}

/// A strided cell is classified by its first byte.
impl Classify<[u8]> for LetterClassifier {
    #[inline(always)]
    fn classify(&self, cell: &[u8]) -> Option<PieceKind> {
        cell.first().and_then(|b| self.classify(b))
    }
}

impl Position {
    /// Builds a position from exactly 64 cells. Castling rights are granted
    /// where king and rook stand on their home squares; every pawn on its
    /// starting rank may double step.
    pub fn from_layout<C, K>(cells: &[C], classifier: &K, order: RankOrder) -> Result<Self, ChessError>
    where
        K: Classify<C> + ?Sized,
    {
        Self::from_cells(cells.iter(), classifier, order)
    }

    /// Builds a position from a raw buffer of 64 fixed-size cells.
    pub fn from_strided<K>(
        source: &[u8],
        stride: usize,
        classifier: &K,
        order: RankOrder,
    ) -> Result<Self, ChessError>
    where
        K: Classify<[u8]> + ?Sized,
    {
        if stride == 0 || source.len() % stride != 0 {
            return Err(ChessError::InvalidStride(stride));
        }
        Self::from_cells(source.chunks_exact(stride), classifier, order)
    }

    /// Reads a letter diagram, rank 8 first. Whitespace is ignored and any
    /// non-letter glyph (`.`, `-`, `x`, …) is an empty square.
    pub fn from_diagram(diagram: &str) -> Result<Self, ChessError> {
        let cells: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        Self::from_layout(&cells, &LetterClassifier, RankOrder::EighthFirst)
    }

    fn from_cells<'a, C, K, I>(cells: I, classifier: &K, order: RankOrder) -> Result<Self, ChessError>
    where
        C: ?Sized + 'a,
        K: Classify<C> + ?Sized,
        I: ExactSizeIterator<Item = &'a C>,
    {
        if cells.len() != CELLS {
            return Err(ChessError::CellCount {
                expected: CELLS,
                found: cells.len(),
            });
        }

        let mut position = Position::new_empty();
        for (i, cell) in cells.enumerate() {
            if let Some(kind) = classifier.classify(cell) {
                position.put(kind, order.square_of(i));
            }
        }
        position.seed_castling_rights();

        debug!(
            pieces = position.all().count_ones(),
            white_castle = position.castling[0],
            black_castle = position.castling[1],
            "position created from layout"
        );
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_table_covers_all_kinds() {
        const GLYPHS: [char; 12] = ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'];
        for (g, kind) in GLYPHS.iter().zip(PieceKind::ALL) {
            assert_eq!(LetterClassifier.classify(g), Some(kind), "glyph {g}");
        }
        assert_eq!(LetterClassifier.classify(&'.'), None);
        assert_eq!(LetterClassifier.classify(&'é'), None);
    }

    #[test]
    fn rank_order_maps_first_cell() {
        assert_eq!(RankOrder::EighthFirst.square_of(0), Square::A8);
        assert_eq!(RankOrder::FirstFirst.square_of(0), Square::A1);
        assert_eq!(RankOrder::EighthFirst.square_of(63), Square::H1);
    }

    #[test]
    fn wrong_cell_count_is_rejected() {
        let err = Position::from_diagram("rnbqkbnr").unwrap_err();
        assert_eq!(err, ChessError::CellCount { expected: 64, found: 8 });
    }

    #[test]
    fn closures_act_as_classifiers() {
        let cells = [0u8; 64];
        let all_kings = |_: &u8| Some(PieceKind::WhiteKing);
        let p = Position::from_layout(&cells, &all_kings, RankOrder::FirstFirst).unwrap();
        assert_eq!(p.pieces(PieceKind::WhiteKing), u64::MAX);
    }
}
