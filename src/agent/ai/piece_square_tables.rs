// Piece-square tables for positional evaluation, one opening and one endgame
// set. Tables are from White's perspective with rank 1 first, so a White
// piece on square `sq` reads index `sq`; Black reads the rank-flipped square.

use crate::game_repr::{Color, Type};

pub const KING_OPENING: [i32; 64] = [
      21,   35,  -11,    6,    1,  -14,   32,   22,  // Rank 1
      14,   18,  -10,  -10,  -14,  -10,   15,   14,  // Rank 2
     -10,  -18,  -17,  -20,  -22,  -21,  -20,  -13,  // Rank 3
     -20,  -33,  -29,  -42,  -44,  -29,  -30,  -19,  // Rank 4
     -32,  -38,  -39,  -52,  -54,  -39,  -39,  -30,  // Rank 5
     -32,  -41,  -40,  -46,  -49,  -40,  -46,  -30,  // Rank 6
     -30,  -37,  -43,  -49,  -50,  -39,  -40,  -30,  // Rank 7
     -30,  -40,  -40,  -50,  -50,  -40,  -40,  -30,  // Rank 8
];

pub const QUEEN_OPENING: [i32; 64] = [
     -15,   -4,  -13,   -8,   -3,  -16,   -8,  -24,  // Rank 1
      -5,   -6,    1,   -6,    3,   -3,    3,  -10,  // Rank 2
     -15,   11,   11,   11,    4,   11,    6,  -15,  // Rank 3
      -6,    4,    7,    1,   -1,    2,   -6,   -2,  // Rank 4
       0,   -4,    7,   -1,    7,   11,    0,    1,  // Rank 5
      -8,   -5,    2,    0,    7,    6,   -4,   -5,  // Rank 6
      -4,   -6,    4,   -5,   -1,    6,    4,   -5,  // Rank 7
     -25,   -9,  -11,   -3,   17,  -13,  -10,  -17,  // Rank 8
];

pub const ROOK_OPENING: [i32; 64] = [
      -1,   -2,   -6,    9,    9,    5,    4,   -5,  // Rank 1
     -10,   -1,   -4,    0,    5,   -6,   -6,   -9,  // Rank 2
       0,    1,    1,   -3,    5,    6,    1,   -9,  // Rank 3
      -4,    3,    5,   -2,    4,    1,   -5,    1,  // Rank 4
     -10,    5,   -4,   -4,   -1,   -6,    3,   -2,  // Rank 5
      -6,    3,    3,    6,    1,   -2,    3,   -5,  // Rank 6
       8,   13,   11,   15,   11,   15,   16,    4,  // Rank 7
       5,   -2,    6,    2,   -2,   -6,    4,   -2,  // Rank 8
];

pub const BISHOP_OPENING: [i32; 64] = [
     -14,   -4,  -15,   -4,   -9,   -4,  -12,  -14,  // Rank 1
      -5,    6,    6,    6,    3,    6,    9,   -7,  // Rank 2
     -15,    4,   14,    8,   16,    4,   16,  -15,  // Rank 3
      -4,    5,   12,   16,    4,    6,    2,  -16,  // Rank 4
     -14,   -1,   11,   14,    4,   10,   11,  -13,  // Rank 5
     -16,    6,   -1,   16,    7,   -1,   -6,   -5,  // Rank 6
     -13,    5,    6,    1,   -6,   -5,    3,   -6,  // Rank 7
     -16,  -15,  -12,   -5,  -10,  -12,  -10,  -20,  // Rank 8
];

pub const KNIGHT_OPENING: [i32; 64] = [
     -50,  -46,  -32,  -24,  -36,  -25,  -34,  -50,  // Rank 1
     -38,  -22,    4,   -1,    8,   -5,  -18,  -34,  // Rank 2
     -32,   -1,    4,   19,   20,    4,   11,  -25,  // Rank 3
     -36,   -5,    9,   23,   24,   21,    2,  -24,  // Rank 4
     -24,    5,   21,   14,   18,    9,   11,  -26,  // Rank 5
     -25,    5,   16,   12,   11,    6,    6,  -29,  // Rank 6
     -37,  -15,    0,   -6,    4,    3,  -17,  -40,  // Rank 7
     -55,  -40,  -30,  -28,  -26,  -30,  -40,  -50,  // Rank 8
];

pub const PAWN_OPENING: [i32; 64] = [
       0,    0,    0,    0,    0,    0,    0,    0,  // Rank 1
       5,   16,   16,  -14,  -14,   13,   15,    8,  // Rank 2
      -1,   -8,   -4,    4,    2,  -12,   -1,    5,  // Rank 3
       6,    4,    6,   14,   14,   -5,    6,   -6,  // Rank 4
       0,   -1,    9,   28,   20,    8,   -1,   11,  // Rank 5
       6,   16,   25,   33,   24,   24,   14,   -6,  // Rank 6
      -4,   68,   61,   47,   47,   49,   45,   -1,  // Rank 7
       0,    0,    0,    0,    0,    0,    0,    0,  // Rank 8
];

pub const KING_ENDGAME: [i32; 64] = [
     -48,  -26,  -26,  -26,  -28,  -25,  -30,  -51,  // Rank 1
     -36,  -27,    5,    2,    5,   -1,  -31,  -33,  // Rank 2
     -30,   -7,   14,   33,   36,   16,  -13,  -33,  // Rank 3
     -36,   -7,   31,   34,   34,   34,  -12,  -31,  // Rank 4
     -34,   -5,   24,   35,   34,   35,  -16,  -35,  // Rank 5
     -35,  -16,   20,   32,   34,   14,  -11,  -30,  // Rank 6
     -30,  -18,  -15,    6,    3,   -6,  -24,  -30,  // Rank 7
     -50,  -40,  -30,  -20,  -20,  -30,  -40,  -50,  // Rank 8
];

pub const QUEEN_ENDGAME: [i32; 64] = [
     -20,   -6,   -7,   -7,   -4,  -12,   -9,  -20,  // Rank 1
     -12,   -6,    5,    0,    0,   -5,    4,  -10,  // Rank 2
     -11,   10,    6,    3,    7,    9,    4,  -10,  // Rank 3
       0,    6,    8,    1,   -1,    1,    0,   -3,  // Rank 4
      -1,   -4,    3,    1,    8,    8,   -2,   -2,  // Rank 5
     -13,   -2,    7,    2,    6,   10,   -4,   -6,  // Rank 6
      -4,   -5,    3,   -4,    2,    6,    3,  -10,  // Rank 7
     -21,   -7,   -6,    1,   -8,  -15,  -10,  -16,  // Rank 8
];

pub const ROOK_ENDGAME: [i32; 64] = [
       1,    0,   -2,    1,    1,    4,    2,    0,  // Rank 1
      -8,   -4,    1,   -4,    3,   -5,   -6,   -5,  // Rank 2
      -6,   -1,    3,   -2,    6,    5,    0,  -15,  // Rank 3
     -15,    6,    2,   -6,    6,    0,   -6,  -10,  // Rank 4
     -16,    6,    0,   -6,   -3,   -3,   -4,   -4,  // Rank 5
     -15,    3,    3,    0,   -1,   -6,    5,   -9,  // Rank 6
      -6,    4,    2,    5,   -1,    3,    4,  -15,  // Rank 7
       5,   -6,    1,   -4,   -4,   -6,    6,   -3,  // Rank 8
];

pub const BISHOP_ENDGAME: [i32; 64] = [
     -15,   -4,  -11,   -4,  -10,  -10,   -6,  -17,  // Rank 1
     -11,    7,    6,    6,   -3,    2,    1,   -7,  // Rank 2
      -4,    4,   11,   12,   10,    7,    7,  -12,  // Rank 3
      -4,    4,   10,   16,    6,   12,    4,  -16,  // Rank 4
      -7,   -1,   11,   16,    5,   11,    7,  -13,  // Rank 5
     -11,   -3,    5,   15,    4,   -1,   -5,  -10,  // Rank 6
     -11,    6,    3,   -6,    4,   -3,    5,   -4,  // Rank 7
     -14,  -13,   -4,   -7,  -14,   -9,  -16,  -20,  // Rank 8
];

pub const KNIGHT_ENDGAME: [i32; 64] = [
     -50,  -40,  -32,  -27,  -30,  -25,  -35,  -50,  // Rank 1
     -43,  -20,    5,   -1,    5,    1,  -22,  -40,  // Rank 2
     -32,    7,    5,   20,   11,   15,    9,  -27,  // Rank 3
     -36,   -5,   18,   16,   14,   20,    5,  -26,  // Rank 4
     -29,    5,   21,   17,   18,    9,   10,  -28,  // Rank 5
     -24,    3,   15,    9,   15,   10,   -6,  -26,  // Rank 6
     -38,  -17,    6,   -5,    5,   -4,  -15,  -40,  // Rank 7
     -50,  -40,  -30,  -24,  -24,  -35,  -40,  -50,  // Rank 8
];

pub const PAWN_ENDGAME: [i32; 64] = [
       0,    0,    0,    0,    0,    0,    0,    0,  // Rank 1
      -2,    5,    6,   -6,    0,    3,    4,   -4,  // Rank 2
      -2,    0,    1,    5,    0,   -1,    0,    1,  // Rank 3
       2,    2,    5,   -3,    0,   -5,    4,   -3,  // Rank 4
      -6,   -4,   -1,   -6,    2,   -1,   -2,   -2,  // Rank 5
       6,   48,   44,   45,   31,   38,   37,   -6,  // Rank 6
      -4,  174,  120,   94,   85,   98,   68,    4,  // Rank 7
       0,    0,    0,    0,    0,    0,    0,    0,  // Rank 8
];

/// Opening tables indexed by `Type::index()`
pub const OPENING_TABLES: [&[i32; 64]; 6] = [
    &KING_OPENING,
    &QUEEN_OPENING,
    &ROOK_OPENING,
    &BISHOP_OPENING,
    &KNIGHT_OPENING,
    &PAWN_OPENING,
];

pub const ENDGAME_TABLES: [&[i32; 64]; 6] = [
    &KING_ENDGAME,
    &QUEEN_ENDGAME,
    &ROOK_ENDGAME,
    &BISHOP_ENDGAME,
    &KNIGHT_ENDGAME,
    &PAWN_ENDGAME,
];

/// Table index for a piece of `color` on `square`
#[inline(always)]
pub fn pst_index(color: Color, square: usize) -> usize {
    match color {
        Color::White => square,
        Color::Black => square ^ 56,
    }
}

#[inline]
pub fn opening_value(piece_type: Type, color: Color, square: usize) -> i32 {
    OPENING_TABLES[piece_type.index()][pst_index(color, square)]
}

#[inline]
pub fn endgame_value(piece_type: Type, color: Color, square: usize) -> i32 {
    ENDGAME_TABLES[piece_type.index()][pst_index(color, square)]
}
