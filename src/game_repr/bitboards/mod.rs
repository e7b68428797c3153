use super::{Color, Piece, Type};

pub mod magic;
pub mod tables;
pub use magic::*;
pub use tables::*;

/// Bitboard representation using 12 u64 values (6 piece types x 2 colors)
/// Each bit represents presence/absence of a piece on that square (0-63)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bitboards {
    /// Indexed by [color][piece_type]
    /// 0=King, 1=Queen, 2=Rook, 3=Bishop, 4=Knight, 5=Pawn
    pieces: [[u64; 6]; 2],
}

impl Bitboards {
    /// Create empty bitboards
    pub fn empty() -> Self {
        Self { pieces: [[0; 6]; 2] }
    }

    /// Standard starting setup
    pub fn starting() -> Self {
        let mut bb = Self::empty();
        let white = &mut bb.pieces[Color::White.index()];
        white[Type::King.index()] = 0x10;
        white[Type::Queen.index()] = 0x08;
        white[Type::Rook.index()] = 0x81;
        white[Type::Bishop.index()] = 0x24;
        white[Type::Knight.index()] = 0x42;
        white[Type::Pawn.index()] = RANK_2;

        let black = &mut bb.pieces[Color::Black.index()];
        black[Type::King.index()] = 0x10 << 56;
        black[Type::Queen.index()] = 0x08 << 56;
        black[Type::Rook.index()] = 0x81 << 56;
        black[Type::Bishop.index()] = 0x24 << 56;
        black[Type::Knight.index()] = 0x42 << 56;
        black[Type::Pawn.index()] = RANK_7;
        bb
    }

    /// Set a bit at the given square for the specified piece
    #[inline]
    pub fn add_piece(&mut self, color: Color, piece_type: Type, square: usize) {
        self.pieces[color.index()][piece_type.index()] |= 1u64 << square;
    }

    /// Clear a bit at the given square for the specified piece
    #[inline]
    pub fn remove_piece(&mut self, color: Color, piece_type: Type, square: usize) {
        self.pieces[color.index()][piece_type.index()] &= !(1u64 << square);
    }

    /// Update a piece position (move from one square to another)
    #[inline]
    pub fn move_piece(&mut self, color: Color, piece_type: Type, from: usize, to: usize) {
        let bb = &mut self.pieces[color.index()][piece_type.index()];
        *bb &= !(1u64 << from);
        *bb |= 1u64 << to;
    }

    /// Get bitboard for a specific piece type and color
    #[inline(always)]
    pub fn pieces_of_type(&self, color: Color, piece_type: Type) -> u64 {
        self.pieces[color.index()][piece_type.index()]
    }

    /// All six boards of one side
    #[inline(always)]
    pub fn side(&self, color: Color) -> &[u64; 6] {
        &self.pieces[color.index()]
    }

    /// Get bitboard for all pieces of a color
    #[inline(always)]
    pub fn occupied_by_color(&self, color: Color) -> u64 {
        self.pieces[color.index()].iter().fold(0, |acc, bb| acc | bb)
    }

    /// Get bitboard for all occupied squares
    #[inline(always)]
    pub fn all_occupied(&self) -> u64 {
        self.occupied_by_color(Color::White) | self.occupied_by_color(Color::Black)
    }

    /// Kind of the `color` piece on `square`, if any
    pub fn type_at(&self, color: Color, square: usize) -> Option<Type> {
        let mask = 1u64 << square;
        Type::ALL
            .into_iter()
            .find(|t| self.pieces[color.index()][t.index()] & mask != 0)
    }

    /// Get the piece at a specific square (if any)
    pub fn piece_at(&self, square: usize) -> Option<Piece> {
        [Color::White, Color::Black].into_iter().find_map(|color| {
            self.type_at(color, square)
                .map(|piece_type| Piece { color, piece_type })
        })
    }

    /// Number of boards with `square` set. More than one means the
    /// position is corrupt.
    pub fn occupancy_count(&self, square: usize) -> u32 {
        let mask = 1u64 << square;
        self.pieces
            .iter()
            .flatten()
            .filter(|bb| *bb & mask != 0)
            .count() as u32
    }

    /// Colour-mirrored copy: ranks flipped and colours swapped.
    pub fn mirrored(&self) -> Self {
        let mut out = Self::empty();
        for color in [Color::White, Color::Black] {
            for t in Type::ALL {
                out.pieces[color.opposite().index()][t.index()] =
                    self.pieces[color.index()][t.index()].swap_bytes();
            }
        }
        out
    }
}

/// Pop the least significant bit from a bitboard and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1; // Clear the LSB
    sq
}

/// Find the index of the least significant bit (without modifying the bitboard)
#[inline(always)]
pub fn bitscan_forward(bb: u64) -> usize {
    bb.trailing_zeros() as usize
}

/// Count the number of set bits in a bitboard
#[inline]
pub fn popcount(bb: u64) -> u32 {
    bb.count_ones()
}

/// Iterate over the set squares of a bitboard, lowest first
pub fn squares(mut bb: u64) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || if bb == 0 { None } else { Some(pop_lsb(&mut bb)) })
}

// Rank masks
pub const RANK_1: u64 = 0x00000000000000FF;
pub const RANK_2: u64 = 0x000000000000FF00;
pub const RANK_7: u64 = 0x00FF000000000000;
pub const RANK_8: u64 = 0xFF00000000000000;
