//! NegamaxPlayer - the search engine behind the `Player` trait
//!
//! # Difficulty Levels
//!
//! - **Easy**: depth 2
//! - **Medium**: depth 4
//! - **Hard**: depth 5
//! - **Expert**: depth 6, the engine default
//!
//! # Examples
//!
//! ```
//! use bitchess::agent::ai::{Difficulty, NegamaxPlayer};
//! use bitchess::agent::Player;
//! use bitchess::game_repr::Position;
//!
//! let mut pos = Position::default();
//! let mut ai = NegamaxPlayer::with_difficulty(Difficulty::Easy);
//! let mv = ai.choose_move(&mut pos);
//! assert!(mv.is_some());
//! ```

use std::str::FromStr;

use thiserror::Error;

use super::search::{SearchEngine, SearchResult};
use crate::agent::player::Player;
use crate::game_repr::{Move, Position};

/// AI difficulty levels mapping to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Depth 2: sees immediate captures and replies
    Easy,
    /// Depth 4
    Medium,
    /// Depth 5
    Hard,
    /// Depth 6, the full default search
    #[default]
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] =
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert];

    /// Number of plies searched at this level
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
            Difficulty::Expert => 6,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown difficulty '{0}' (expected easy, medium, hard or expert)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// AI Player that uses Negamax algorithm with alpha-beta pruning
pub struct NegamaxPlayer {
    engine: SearchEngine,
    difficulty: Difficulty,
    name: String,
    last_result: Option<SearchResult>,
}

impl NegamaxPlayer {
    pub fn new(difficulty: Difficulty, name: String) -> Self {
        Self {
            engine: SearchEngine::with_depth(difficulty.max_depth()),
            difficulty,
            name,
            last_result: None,
        }
    }

    /// Named after its difficulty, e.g. "AI (Easy)"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty, format!("AI ({})", difficulty.name()))
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change the search depth. The name follows if it was the generated one.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.name == format!("AI ({})", self.difficulty.name()) {
            self.name = format!("AI ({})", difficulty.name());
        }
        self.difficulty = difficulty;
        self.engine.set_max_depth(difficulty.max_depth());
    }

    /// Diagnostics of the last search this player ran
    pub fn last_result(&self) -> Option<SearchResult> {
        self.last_result
    }
}

impl Player for NegamaxPlayer {
    fn choose_move(&mut self, pos: &mut Position) -> Option<Move> {
        let result = self.engine.search_root(pos);
        self.last_result = Some(result);
        result.best_move
    }

    fn name(&self) -> &str {
        &self.name
    }
}
