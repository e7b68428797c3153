// Move ordering: castles first, then captures by MVV-LVA, then by how much
// the moving piece likes its destination square

use super::evaluation::material_value;
use super::piece_square_tables::opening_value;
use crate::game_repr::{Color, Move, MoveList};
use smallvec::SmallVec;

const CASTLE_BONUS: i32 = 10_000;
const CAPTURE_WEIGHT: i32 = 50;
const PST_WEIGHT: i32 = 10;

/// Most valuable victim, least valuable attacker.
fn mvv_lva(mv: &Move) -> Option<i32> {
    let victim = mv.captured()?;
    let victim_value = material_value(victim);
    let attacker_value = material_value(mv.piece());

    let mut score = CAPTURE_WEIGHT * (victim_value * 100 - attacker_value);
    if victim_value < attacker_value {
        score /= 5;
    }
    Some(score)
}

/// Heuristic score of `mv` for `color`; higher is searched first.
pub fn score_move(mv: &Move, color: Color) -> i32 {
    let mut score = 0;
    if mv.is_castle() {
        score += CASTLE_BONUS;
    }
    if let Some(capture) = mvv_lva(mv) {
        score += capture;
    }
    score + PST_WEIGHT * opening_value(mv.piece(), color, mv.target())
}

/// Sort `moves` best first. The sort is stable so equal scores keep
/// generation order.
pub fn order_moves(moves: &mut MoveList, color: Color) {
    let mut scored: SmallVec<[(i32, Move); 64]> =
        moves.iter().map(|mv| (score_move(mv, color), *mv)).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    moves.clear();
    moves.extend(scored.into_iter().map(|(_, mv)| mv));
}
