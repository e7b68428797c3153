// Negamax Search with Alpha-Beta Pruning
//
// Negamax scores every node from the side to move's point of view, so one
// function serves both players: a child's score is negated on the way up.
// Alpha-beta stops examining siblings once a move proves the opponent
// would never allow this line.
//
// The tree is cut at a fixed ply and the static evaluation is taken there;
// there is no quiescence extension.

use super::evaluation::evaluate;
use super::move_ordering::order_moves;
use crate::game_repr::{GameResult, Move, Position};

/// Checkmate score - use large value but leave room for mate distance
pub const MATE_SCORE: i32 = 30000;

/// Minimum score (worse than any mate)
pub const MIN_SCORE: i32 = -MATE_SCORE - 100;

/// Maximum score
pub const MAX_SCORE: i32 = MATE_SCORE + 100;

/// Deepest ply the search looks at by default
pub const MAX_SEARCH_DEPTH: u8 = 6;

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every call to `negamax`, leaves included
    pub nodes: u64,
    /// Beta cutoffs
    pub prunes: u64,
}

/// Negamax search with alpha-beta pruning
///
/// * `ply` - distance from the root, used to prefer shorter mates
/// * `max_depth` - ply at which the static evaluation is returned
///
/// Returns the score for the side to move and the move achieving it. No
/// move is returned at terminal and leaf nodes. The position is restored
/// before returning.
pub fn negamax(
    pos: &mut Position,
    ply: u8,
    max_depth: u8,
    mut alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> (i32, Option<Move>) {
    stats.nodes += 1;

    let mut moves = pos.legal_moves();
    match pos.check_winner(&moves) {
        GameResult::NoResult => {}
        GameResult::Draw => return (0, None),
        // Only the side to move can have been mated
        GameResult::WhiteWins | GameResult::BlackWins => return (-(MATE_SCORE - ply as i32), None),
    }

    if ply >= max_depth {
        return (evaluate(pos), None);
    }

    order_moves(&mut moves, pos.side_to_move());

    let mut best_score = MIN_SCORE;
    let mut best_move = None;

    for mv in moves {
        pos.make_move(mv);
        let (child, _) = negamax(pos, ply + 1, max_depth, -beta, -alpha, stats);
        pos.undo_last_move();
        let score = -child;

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            stats.prunes += 1;
            break;
        }
    }

    (best_score, best_move)
}

/// Check if a score represents a forced mate
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE - 100
}

/// Moves until mate from a mate score; negative when the side to move is
/// the one getting mated. `None` for ordinary scores.
pub fn mate_distance(score: i32) -> Option<i32> {
    if !is_mate_score(score) {
        return None;
    }

    if score > 0 {
        Some((MATE_SCORE - score + 1) / 2)
    } else {
        Some(-(MATE_SCORE + score + 1) / 2)
    }
}
