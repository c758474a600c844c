use crate::bitboard::{BitIter, BitboardExt, CENTER, RANK_2, RANK_7};
use crate::square::Square;
use serde::{Deserialize, Serialize};

pub mod castle_bits;
pub mod layout;
pub use castle_bits::*;
pub use layout::{Classify, LetterClassifier, RankOrder};

/// Starting position constants
// -------- White side (ranks 1 & 2) --------
const WHITE_PAWN_MASK: u64 = 0x0000_0000_0000_FF00;
// Rooks on a1 (bit 0) and h1 (bit 7)
const WHITE_ROOK_MASK: u64 = (1 << 0) | (1 << 7);
// Knights on b1 (bit 1) and g1 (bit 6)
const WHITE_KNIGHT_MASK: u64 = (1 << 1) | (1 << 6);
// Bishops on c1 (bit 2) and f1 (bit 5)
const WHITE_BISHOP_MASK: u64 = (1 << 2) | (1 << 5);
const WHITE_QUEEN_MASK: u64 = 1 << 3; // d1
const WHITE_KING_MASK: u64 = 1 << 4; // e1

// -------- Black side (ranks 7 & 8) --------
const BLACK_PAWN_MASK: u64 = 0x00FF_0000_0000_0000;
const BLACK_ROOK_MASK: u64 = (1 << 56) | (1 << 63);
const BLACK_KNIGHT_MASK: u64 = (1 << 57) | (1 << 62);
const BLACK_BISHOP_MASK: u64 = (1 << 58) | (1 << 61);
const BLACK_QUEEN_MASK: u64 = 1 << 59; // d8
const BLACK_KING_MASK: u64 = 1 << 60; // e8

/// Which side a piece belongs to, or which side is to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

/// Uncolored piece role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// One of the twelve colored piece variants. "No piece" is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction of pawn travel as a signed square offset.
    #[inline(always)]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => -8,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl Piece {
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Decode a 0–5 value into a Piece.
    #[inline(always)]
    pub(crate) fn from_u8(v: u8) -> Self {
        match v {
            0 => Piece::Pawn,
            1 => Piece::Knight,
            2 => Piece::Bishop,
            3 => Piece::Rook,
            4 => Piece::Queen,
            5 => Piece::King,
            _ => panic!("Invalid Piece encoding: {}", v),
        }
    }
}

impl PieceKind {
    pub const ALL: [PieceKind; 12] = [
        PieceKind::WhitePawn,
        PieceKind::WhiteKnight,
        PieceKind::WhiteBishop,
        PieceKind::WhiteRook,
        PieceKind::WhiteQueen,
        PieceKind::WhiteKing,
        PieceKind::BlackPawn,
        PieceKind::BlackKnight,
        PieceKind::BlackBishop,
        PieceKind::BlackRook,
        PieceKind::BlackQueen,
        PieceKind::BlackKing,
    ];

    #[inline(always)]
    pub const fn new(color: Color, piece: Piece) -> Self {
        Self::ALL[(color as usize) * 6 + piece as usize]
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn color(self) -> Color {
        if (self as u8) < 6 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline(always)]
    pub fn piece(self) -> Piece {
        Piece::from_u8(self as u8 % 6)
    }

    /// Same role, other color.
    #[inline(always)]
    pub fn flip_color(self) -> Self {
        PieceKind::new(self.color().opposite(), self.piece())
    }
}

/// Stepwise iteration state for legal destinations of one source square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveCursor {
    pub(crate) remaining: u64,
    pub(crate) source: Option<Square>,
}

/// Bit-per-square position.
///
/// `occupancy` and `kinds` are kept in lockstep: a square's bit is set in
/// `occupancy[k]` exactly when `kinds[sq] == Some(k)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) occupancy: [u64; 12],
    pub(crate) kinds: [Option<PieceKind>; 64],
    /// Pawns (per color) that may still advance two squares.
    pub(crate) double_step: [u64; 2],
    /// Castle destinations still available per color.
    pub(crate) castling: [CastleMask; 2],
    /// At most one bit; valid only for the ply right after a double step.
    pub(crate) en_passant: u64,
    pub(crate) cursor: MoveCursor,
}

impl Position {
    /// A board with no pieces and no rights.
    pub fn new_empty() -> Self {
        Position {
            occupancy: [0; 12],
            kinds: [None; 64],
            double_step: [RANK_2, RANK_7],
            castling: [0; 2],
            en_passant: 0,
            cursor: MoveCursor::default(),
        }
    }

    /// The standard initial array with full castling rights.
    pub fn new() -> Self {
        let mut p = Position::new_empty();
        let setup = [
            (PieceKind::WhitePawn, WHITE_PAWN_MASK),
            (PieceKind::WhiteKnight, WHITE_KNIGHT_MASK),
            (PieceKind::WhiteBishop, WHITE_BISHOP_MASK),
            (PieceKind::WhiteRook, WHITE_ROOK_MASK),
            (PieceKind::WhiteQueen, WHITE_QUEEN_MASK),
            (PieceKind::WhiteKing, WHITE_KING_MASK),
            (PieceKind::BlackPawn, BLACK_PAWN_MASK),
            (PieceKind::BlackKnight, BLACK_KNIGHT_MASK),
            (PieceKind::BlackBishop, BLACK_BISHOP_MASK),
            (PieceKind::BlackRook, BLACK_ROOK_MASK),
            (PieceKind::BlackQueen, BLACK_QUEEN_MASK),
            (PieceKind::BlackKing, BLACK_KING_MASK),
        ];
        for (kind, mask) in setup {
            for sq in BitIter(mask) {
                p.put(kind, Square::from_index(sq));
            }
        }
        p.seed_castling_rights();
        p
    }

    /// Grants castling rights from the current king and rook placement:
    /// a king on its home square gets both rights, then each right whose rook
    /// is missing from its home square is dropped.
    pub(crate) fn seed_castling_rights(&mut self) {
        for color in Color::BOTH {
            let ci = color as usize;
            self.castling[ci] = 0;

            let king_home = king_home(color);
            if self.kinds[king_home as usize] != Some(PieceKind::new(color, Piece::King)) {
                continue;
            }

            let mut rights = all_rights(color);
            let mut each = rights;
            while each != 0 {
                let right = 1u64 << each.pop_lsb();
                let rook_ok = rook_home_for_right(right).is_some_and(|home| {
                    self.kinds[home as usize] == Some(PieceKind::new(color, Piece::Rook))
                });
                if !rook_ok {
                    rights &= !right;
                }
            }
            self.castling[ci] = rights;
        }
    }

    /// Places `kind` on an empty square.
    #[inline(always)]
    pub(crate) fn put(&mut self, kind: PieceKind, sq: Square) {
        debug_assert!(self.kinds[sq.index() as usize].is_none(), "square {sq} occupied");
        self.occupancy[kind.index()] |= sq.bit();
        self.kinds[sq.index() as usize] = Some(kind);
    }

    /// Clears a square, returning what stood there.
    #[inline(always)]
    pub(crate) fn remove(&mut self, sq: Square) -> Option<PieceKind> {
        let i = sq.index() as usize;
        let kind = self.kinds[i].take()?;
        self.occupancy[kind.index()] &= !sq.bit();
        Some(kind)
    }

    /// Returns the piece at a given square, or None if empty.
    #[inline(always)]
    pub fn kind_at(&self, sq: Square) -> Option<PieceKind> {
        self.kinds[sq.index() as usize]
    }

    #[inline(always)]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.kind_at(sq).map(PieceKind::color)
    }

    /// Occupancy mask of one piece kind.
    #[inline(always)]
    pub fn pieces(&self, kind: PieceKind) -> u64 {
        self.occupancy[kind.index()]
    }

    /// Shorthand for `pieces(PieceKind::new(color, piece))`.
    #[inline(always)]
    pub fn bb(&self, color: Color, piece: Piece) -> u64 {
        self.occupancy[PieceKind::new(color, piece).index()]
    }

    pub fn white(&self) -> u64 {
        self.occupancy[..6].iter().fold(0, |acc, bb| acc | bb)
    }

    pub fn black(&self) -> u64 {
        self.occupancy[6..].iter().fold(0, |acc, bb| acc | bb)
    }

    #[inline(always)]
    pub fn occupancy(&self, color: Color) -> u64 {
        match color {
            Color::White => self.white(),
            Color::Black => self.black(),
        }
    }

    /// Bitboard of all pieces (both colors).
    #[inline(always)]
    pub fn all(&self) -> u64 {
        self.white() | self.black()
    }

    pub fn piece_count(&self, color: Color) -> u32 {
        self.occupancy(color).popcount()
    }

    /// How many of d4, e4, d5, e5 the side occupies.
    pub fn center_occupation(&self, color: Color) -> u32 {
        (self.occupancy(color) & CENTER).popcount()
    }

    /// Square of the side's king; with several kings the lowest one wins.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.bb(color, Piece::King);
        (kings != 0).then(|| Square::from_index(kings.lsb()))
    }

    #[inline(always)]
    pub fn castling_rights(&self, color: Color) -> CastleMask {
        self.castling[color as usize]
    }

    #[inline(always)]
    pub fn has_kingside_castle(&self, color: Color) -> bool {
        let right = match color {
            Color::White => WHITE_KINGSIDE,
            Color::Black => BLACK_KINGSIDE,
        };
        self.castling[color as usize] & right != 0
    }

    #[inline(always)]
    pub fn has_queenside_castle(&self, color: Color) -> bool {
        let right = match color {
            Color::White => WHITE_QUEENSIDE,
            Color::Black => BLACK_QUEENSIDE,
        };
        self.castling[color as usize] & right != 0
    }

    /// En passant target as a one-bit mask (0 when unavailable).
    #[inline(always)]
    pub fn en_passant(&self) -> u64 {
        self.en_passant
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        (self.en_passant != 0).then(|| Square::from_index(self.en_passant.lsb()))
    }

    /// Squares holding pawns of `color` that may still double step.
    #[inline(always)]
    pub fn double_step(&self, color: Color) -> u64 {
        self.double_step[color as usize]
    }

    /// Validate that no square is claimed twice and that the kind table
    /// agrees with the occupancy masks.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen: u64 = 0;
        for kind in PieceKind::ALL {
            let bb = self.pieces(kind);
            if seen & bb != 0 {
                return Err(format!("Bitboard `{:?}` overlaps with another piece", kind));
            }
            seen |= bb;
        }

        for (i, slot) in self.kinds.iter().enumerate() {
            let bit = 1u64 << i;
            match slot {
                Some(kind) if self.pieces(*kind) & bit == 0 => {
                    return Err(format!("kind table says {:?} on {} but mask disagrees", kind, Square::from_index(i as u8)));
                }
                None if seen & bit != 0 => {
                    return Err(format!("mask bit set on empty square {}", Square::from_index(i as u8)));
                }
                _ => {}
            }
        }

        if self.en_passant.popcount() > 1 {
            return Err(format!("more than one en passant target: {:#x}", self.en_passant));
        }
        Ok(())
    }

    /// Colors swapped and ranks mirrored (a1 <-> a8). Castling rights,
    /// double-step masks and the en passant target are carried across.
    pub fn color_flipped(&self) -> Self {
        let mut p = Position::new_empty();
        for (i, slot) in self.kinds.iter().enumerate() {
            if let Some(kind) = slot {
                p.put(kind.flip_color(), Square::from_index(i as u8).flip_rank());
            }
        }
        p.double_step = [
            self.double_step[1].swap_bytes(),
            self.double_step[0].swap_bytes(),
        ];
        p.castling = [self.castling[1].swap_bytes(), self.castling[0].swap_bytes()];
        p.en_passant = self.en_passant.swap_bytes();
        p
    }
}

/// An all-zero board (no pieces).
impl Default for Position {
    fn default() -> Self {
        Position::new_empty()
    }
}
