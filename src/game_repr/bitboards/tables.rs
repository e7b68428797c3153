use once_cell::sync::Lazy;

use super::magic::{MagicTable, Slider};
use super::{Color, Type, RANK_1};

/// Precomputed knight attack tables
/// KNIGHT_ATTACKS[square] returns a bitboard of all squares a knight can attack from that square
pub static KNIGHT_ATTACKS: [u64; 64] = generate_leaper_attacks(&[
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
]);

/// Precomputed king attack tables
pub static KING_ATTACKS: [u64; 64] = generate_leaper_attacks(&[
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
]);

/// PAWN_ATTACKS[color][square]: diagonal capture squares of a pawn
pub static PAWN_ATTACKS: [[u64; 64]; 2] = generate_pawn_attacks();

/// PAWN_PUSHES[color][square]: single push, plus the double push from the start rank
pub static PAWN_PUSHES: [[u64; 64]; 2] = generate_pawn_pushes();

/// Generate a step-piece table at compile time from (rank, file) offsets
const fn generate_leaper_attacks(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    let mut sq = 0;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut attack = 0u64;

        let mut i = 0;
        while i < 8 {
            let (dr, df) = offsets[i];
            let new_rank = rank + dr;
            let new_file = file + df;

            // Off-board targets are dropped, which also rules out wrapping
            if new_rank >= 0 && new_rank < 8 && new_file >= 0 && new_file < 8 {
                attack |= 1u64 << (new_rank * 8 + new_file);
            }

            i += 1;
        }

        attacks[sq] = attack;
        sq += 1;
    }

    attacks
}

/// Index 0 = White, Index 1 = Black
const fn generate_pawn_attacks() -> [[u64; 64]; 2] {
    let mut attacks = [[0u64; 64]; 2];
    let mut sq = 0;

    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;

        if rank < 7 {
            if file > 0 {
                attacks[0][sq] |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks[0][sq] |= 1u64 << (sq + 9);
            }
        }

        if rank > 0 {
            if file > 0 {
                attacks[1][sq] |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks[1][sq] |= 1u64 << (sq - 7);
            }
        }

        sq += 1;
    }

    attacks
}

const fn generate_pawn_pushes() -> [[u64; 64]; 2] {
    let mut pushes = [[0u64; 64]; 2];
    let mut sq = 0;

    while sq < 64 {
        let rank = sq / 8;

        if rank < 7 {
            pushes[0][sq] |= 1u64 << (sq + 8);
            if rank == 1 {
                pushes[0][sq] |= 1u64 << (sq + 16);
            }
        }

        if rank > 0 {
            pushes[1][sq] |= 1u64 << (sq - 8);
            if rank == 6 {
                pushes[1][sq] |= 1u64 << (sq - 16);
            }
        }

        sq += 1;
    }

    pushes
}

/// Process-wide attack tables, built on first use and read-only afterwards.
static ATTACK_TABLES: Lazy<AttackTables> = Lazy::new(AttackTables::build);

/// Move and attack masks for every piece kind. Step pieces and pawns come
/// from the compile-time tables above, sliders from magic lookups.
pub struct AttackTables {
    rook: MagicTable,
    bishop: MagicTable,
}

impl AttackTables {
    fn build() -> Self {
        let tables = Self {
            rook: MagicTable::build(Slider::Rook),
            bishop: MagicTable::build(Slider::Bishop),
        };
        log::debug!(
            "attack tables ready: {} rook and {} bishop entries",
            tables.rook.len(),
            tables.bishop.len()
        );
        tables
    }

    /// The shared tables. The first call builds them.
    #[inline(always)]
    pub fn get() -> &'static AttackTables {
        &ATTACK_TABLES
    }

    #[inline(always)]
    pub fn king(&self, square: usize) -> u64 {
        KING_ATTACKS[square]
    }

    #[inline(always)]
    pub fn knight(&self, square: usize) -> u64 {
        KNIGHT_ATTACKS[square]
    }

    #[inline(always)]
    pub fn rook(&self, square: usize, occupied: u64) -> u64 {
        self.rook.attacks(square, occupied)
    }

    #[inline(always)]
    pub fn bishop(&self, square: usize, occupied: u64) -> u64 {
        self.bishop.attacks(square, occupied)
    }

    #[inline(always)]
    pub fn queen(&self, square: usize, occupied: u64) -> u64 {
        self.rook(square, occupied) | self.bishop(square, occupied)
    }

    #[inline(always)]
    pub fn pawn_attacks(&self, color: Color, square: usize) -> u64 {
        PAWN_ATTACKS[color.index()][square]
    }

    /// Forward pawn moves with blockers applied: the double push needs both
    /// squares empty.
    pub fn pawn_pushes(&self, color: Color, square: usize, occupied: u64) -> u64 {
        let pushes = PAWN_PUSHES[color.index()][square] & !occupied;
        let single = match color {
            Color::White => (1u64 << square) << 8,
            Color::Black => (1u64 << square) >> 8,
        };
        if pushes & single == 0 {
            0
        } else {
            pushes
        }
    }

    /// Squares a piece on `square` reaches given all blockers, before
    /// removing friendly targets. Pawns get pushes and diagonals onto
    /// occupied squares only.
    pub fn trace(&self, piece_type: Type, color: Color, square: usize, occupied: u64) -> u64 {
        match piece_type {
            Type::King => self.king(square),
            Type::Queen => self.queen(square, occupied),
            Type::Rook => self.rook(square, occupied),
            Type::Bishop => self.bishop(square, occupied),
            Type::Knight => self.knight(square),
            Type::Pawn => {
                self.pawn_pushes(color, square, occupied)
                    | (self.pawn_attacks(color, square) & occupied)
            }
        }
    }
}

/// Last rank for a pawn of `color`
pub fn promotion_mask(color: Color) -> u64 {
    RANK_1 << (8 * color.promotion_rank())
}
