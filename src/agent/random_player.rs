use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::Player;
use crate::game_repr::{Move, Position};

/// Picks uniformly among the legal moves. Seeded so games replay exactly.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, pos: &mut Position) -> Option<Move> {
        pos.legal_moves().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
