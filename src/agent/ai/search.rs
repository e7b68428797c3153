// Root search driver
//
// Wraps `negamax` with configuration, counters and logging. The root loop
// is unrolled here so every root move's score can be reported.

use super::move_ordering::order_moves;
use super::negamax::{negamax, SearchStats, MATE_SCORE, MAX_SCORE, MAX_SEARCH_DEPTH, MIN_SCORE};
use crate::game_repr::{GameResult, Move, Position};
use std::time::Instant;

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Ply at which the static evaluation is taken. Zero is treated as one
    /// so a move is always chosen.
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: MAX_SEARCH_DEPTH }
    }
}

/// Result of a search operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes_searched: u64,
    pub prunes: u64,
}

/// Fixed-depth negamax searcher. Counters describe the most recent search.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, stats: SearchStats::default() }
    }

    pub fn with_depth(max_depth: u8) -> Self {
        Self::new(SearchConfig { max_depth })
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_max_depth(&mut self, max_depth: u8) {
        self.config.max_depth = max_depth;
    }

    /// Best move for the side to move, or `None` when the game is over.
    pub fn best_move(&mut self, pos: &mut Position) -> Option<Move> {
        self.search_root(pos).best_move
    }

    pub fn nodes_searched(&self) -> u64 {
        self.stats.nodes
    }

    pub fn prunes(&self) -> u64 {
        self.stats.prunes
    }

    /// Search `pos` to the configured depth. The position is left as it
    /// was found.
    pub fn search_root(&mut self, pos: &mut Position) -> SearchResult {
        let start = Instant::now();
        let max_depth = self.config.max_depth.max(1);
        self.stats = SearchStats::default();
        self.stats.nodes += 1;

        log::info!("searching {:?} to move, depth {}", pos.side_to_move(), max_depth);

        let mut moves = pos.legal_moves();
        let terminal = match pos.check_winner(&moves) {
            GameResult::NoResult => None,
            GameResult::Draw => Some(0),
            GameResult::WhiteWins | GameResult::BlackWins => Some(-MATE_SCORE),
        };
        if let Some(score) = terminal {
            log::info!("no legal moves, score {}", score);
            return self.result(None, score);
        }

        order_moves(&mut moves, pos.side_to_move());

        let mut alpha = MIN_SCORE;
        let mut best_score = MIN_SCORE;
        let mut best_move = None;

        for mv in moves {
            pos.make_move(mv);
            let (child, _) = negamax(pos, 1, max_depth, -MAX_SCORE, -alpha, &mut self.stats);
            pos.undo_last_move();
            let score = -child;

            log::debug!("root move {} scores {}", mv, score);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        log::info!(
            "best {} score {} nodes {} prunes {} in {} ms",
            best_move.map_or_else(|| "none".to_string(), |m| m.to_uci()),
            best_score,
            self.stats.nodes,
            self.stats.prunes,
            start.elapsed().as_millis()
        );

        self.result(best_move, best_score)
    }

    fn result(&self, best_move: Option<Move>, score: i32) -> SearchResult {
        SearchResult {
            best_move,
            score,
            nodes_searched: self.stats.nodes,
            prunes: self.stats.prunes,
        }
    }
}
