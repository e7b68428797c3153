use super::Color;

/// Which rook the king castles with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];
}

/// Fixed squares involved in one castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleSquares {
    pub king_from: usize,
    pub king_to: usize,
    pub rook_from: usize,
    pub rook_to: usize,
    /// Squares strictly between king and rook; all must be empty.
    pub between: u64,
    /// King's square, transit square and destination; none may be attacked.
    pub king_path: [usize; 3],
}

impl CastleSquares {
    pub const fn of(color: Color, side: CastleSide) -> CastleSquares {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => CastleSquares {
                king_from: 4,
                king_to: 6,
                rook_from: 7,
                rook_to: 5,
                between: (1 << 5) | (1 << 6),
                king_path: [4, 5, 6],
            },
            (Color::White, CastleSide::QueenSide) => CastleSquares {
                king_from: 4,
                king_to: 2,
                rook_from: 0,
                rook_to: 3,
                between: (1 << 1) | (1 << 2) | (1 << 3),
                king_path: [4, 3, 2],
            },
            (Color::Black, CastleSide::KingSide) => CastleSquares {
                king_from: 60,
                king_to: 62,
                rook_from: 63,
                rook_to: 61,
                between: (1 << 61) | (1 << 62),
                king_path: [60, 61, 62],
            },
            (Color::Black, CastleSide::QueenSide) => CastleSquares {
                king_from: 60,
                king_to: 58,
                rook_from: 56,
                rook_to: 59,
                between: (1 << 57) | (1 << 58) | (1 << 59),
                king_path: [60, 59, 58],
            },
        }
    }
}

/// Four castling rights packed into the low nibble.
///
/// Rights are only ever cleared while a game is played; the only way to get
/// one back is undoing a move, which restores the snapshot stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self(0b1111)
    }

    pub const fn none() -> Self {
        Self(0)
    }

    #[inline]
    const fn bit(color: Color, side: CastleSide) -> u8 {
        let c = match color {
            Color::White => 0,
            Color::Black => 2,
        };
        let s = match side {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        };
        1 << (c + s)
    }

    #[inline]
    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit(color, side);
    }

    pub fn clear(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit(color, side);
    }

    pub fn clear_color(&mut self, color: Color) {
        self.clear(color, CastleSide::KingSide);
        self.clear(color, CastleSide::QueenSide);
    }

    /// Clear the right tied to a rook standing on its home corner.
    pub fn clear_rook_corner(&mut self, square: usize) {
        match square {
            0 => self.clear(Color::White, CastleSide::QueenSide),
            7 => self.clear(Color::White, CastleSide::KingSide),
            56 => self.clear(Color::Black, CastleSide::QueenSide),
            63 => self.clear(Color::Black, CastleSide::KingSide),
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Same rights with the colours swapped.
    pub fn mirrored(&self) -> Self {
        Self(((self.0 & 0b0011) << 2) | (self.0 >> 2))
    }

    /// FEN castling field, `-` when no right is left.
    pub fn to_fen(&self) -> String {
        let mut s = String::new();
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.has(color, side) {
                s.push(c);
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}
