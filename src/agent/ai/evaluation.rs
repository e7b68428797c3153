// Position evaluation function
// Returns score in centipawns (positive = good for side to move)

use super::piece_square_tables::{endgame_value, opening_value};
use crate::game_repr::bitboards::{popcount, squares};
use crate::game_repr::{Color, Position, Type};

/// Phase score above which only the opening weights count
pub const OPENING_PHASE_THRESHOLD: i32 = 5900;

/// Phase score below which only the endgame weights count
pub const ENDGAME_PHASE_THRESHOLD: i32 = 500;

// Material in `Type::index()` order: king, queen, rook, bishop, knight, pawn
const OPENING_MATERIAL: [i32; 6] = [20001, 888, 488, 319, 308, 89];
const ENDGAME_MATERIAL: [i32; 6] = [19998, 853, 497, 331, 319, 96];

/// Stage of the game derived from the remaining non-pawn material
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl GamePhase {
    pub fn from_score(phase_score: i32) -> GamePhase {
        if phase_score > OPENING_PHASE_THRESHOLD {
            GamePhase::Opening
        } else if phase_score < ENDGAME_PHASE_THRESHOLD {
            GamePhase::Endgame
        } else {
            GamePhase::Middlegame
        }
    }
}

/// Tapered evaluation score with opening and endgame components
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaperedScore {
    pub opening: i32,
    pub endgame: i32,
}

impl TaperedScore {
    /// Collapse to a single score. In the middlegame the two halves are
    /// blended linearly by `phase_score` over the opening threshold.
    pub fn interpolate(&self, phase_score: i32) -> i32 {
        match GamePhase::from_score(phase_score) {
            GamePhase::Opening => self.opening,
            GamePhase::Endgame => self.endgame,
            GamePhase::Middlegame => {
                let opening = self.opening * phase_score;
                let endgame = self.endgame * (OPENING_PHASE_THRESHOLD - phase_score);
                (opening + endgame) / OPENING_PHASE_THRESHOLD
            }
        }
    }
}

/// Opening material value, used by move ordering as well
#[inline]
pub fn material_value(piece_type: Type) -> i32 {
    OPENING_MATERIAL[piece_type.index()]
}

#[inline]
pub fn endgame_material_value(piece_type: Type) -> i32 {
    ENDGAME_MATERIAL[piece_type.index()]
}

/// Opening material of every queen, rook, bishop and knight on the board.
pub fn game_phase_score(pos: &Position) -> i32 {
    let boards = pos.bitboards();
    let mut score = 0;
    for color in [Color::White, Color::Black] {
        for piece_type in [Type::Queen, Type::Rook, Type::Bishop, Type::Knight] {
            let count = popcount(boards.pieces_of_type(color, piece_type)) as i32;
            score += count * material_value(piece_type);
        }
    }
    score
}

/// Material plus piece-square bonus for both phases, from White's side.
pub fn white_relative_score(pos: &Position) -> TaperedScore {
    let boards = pos.bitboards();
    let mut total = TaperedScore::default();

    for color in [Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        for piece_type in Type::ALL {
            for sq in squares(boards.pieces_of_type(color, piece_type)) {
                total.opening +=
                    sign * (material_value(piece_type) + opening_value(piece_type, color, sq));
                total.endgame += sign
                    * (endgame_material_value(piece_type) + endgame_value(piece_type, color, sq));
            }
        }
    }
    total
}

/// Static evaluation from the side to move's point of view.
pub fn evaluate(pos: &Position) -> i32 {
    let score = white_relative_score(pos).interpolate(game_phase_score(pos));
    match pos.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}
