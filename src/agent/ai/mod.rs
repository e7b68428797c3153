// AI Agent - Negamax with Alpha-Beta Pruning
//
// Fixed-depth negamax over a tapered material and piece-square evaluation,
// with castles and captures ordered first.

mod evaluation;
mod move_ordering;
mod negamax;
mod negamax_player;
mod piece_square_tables;
mod search;

#[cfg(test)]
mod tests;

pub use evaluation::{evaluate, game_phase_score, material_value, GamePhase, TaperedScore};
pub use move_ordering::{order_moves, score_move};
pub use negamax::{
    is_mate_score, mate_distance, negamax, SearchStats, MATE_SCORE, MAX_SCORE, MAX_SEARCH_DEPTH,
    MIN_SCORE,
};
pub use negamax_player::{Difficulty, NegamaxPlayer, ParseDifficultyError};
pub use search::{SearchConfig, SearchEngine, SearchResult};
