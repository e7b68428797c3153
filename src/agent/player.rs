//! Player trait and the self-play loop.
//!
//! A player is anything that can pick a move for the side to move: the
//! search engine, a random mover, or a test double. Players receive the
//! live position mutably so searchers can make and undo moves in place;
//! they must hand it back unchanged.

use crate::game_repr::{Color, GameResult, Move, Position};

/// Trait for entities that can provide chess moves.
pub trait Player {
    /// Choose a move for the side to move in `pos`.
    ///
    /// Returns `None` only when there is no legal move. The returned move
    /// must come from `pos.legal_moves()`.
    fn choose_move(&mut self, pos: &mut Position) -> Option<Move>;

    /// Display name used in logs
    fn name(&self) -> &str;
}

/// Play a game from the starting position.
pub fn play_game(white: &mut dyn Player, black: &mut dyn Player, max_plies: usize) -> GameResult {
    let mut pos = Position::default();
    play_game_from(&mut pos, white, black, max_plies)
}

/// Alternate `white` and `black` from `pos` until the side to move has no
/// legal move or `max_plies` moves have been played, in which case the
/// result is `NoResult`. A player choosing a move that is not legal loses.
pub fn play_game_from(
    pos: &mut Position,
    white: &mut dyn Player,
    black: &mut dyn Player,
    max_plies: usize,
) -> GameResult {
    log::info!("{} (white) vs {} (black)", white.name(), black.name());

    for ply in 0..max_plies {
        let moves = pos.legal_moves();
        let result = pos.check_winner(&moves);
        if result.is_over() {
            log::info!("game over after {} plies: {:?}", ply, result);
            return result;
        }

        let mover = pos.side_to_move();
        let (name, chosen) = match mover {
            Color::White => (white.name().to_string(), white.choose_move(pos)),
            Color::Black => (black.name().to_string(), black.choose_move(pos)),
        };

        let mv = match chosen {
            Some(mv) if moves.contains(&mv) => mv,
            other => {
                log::warn!("{} chose an illegal move {:?}, forfeiting", name, other);
                return GameResult::win_for(mover.opposite());
            }
        };

        log::debug!("{}. {} plays {}", ply / 2 + 1, name, mv);
        pos.make_move(mv);
    }

    let result = pos.game_result();
    if result.is_over() {
        log::info!("game over after {} plies: {:?}", max_plies, result);
    } else {
        log::info!("ply limit {} reached", max_plies);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::RandomPlayer;

    /// Plays the first move the script names, then nothing.
    struct Scripted {
        moves: Vec<&'static str>,
    }

    impl Player for Scripted {
        fn choose_move(&mut self, pos: &mut Position) -> Option<Move> {
            if self.moves.is_empty() {
                return None;
            }
            let text = self.moves.remove(0);
            pos.find_move(text).ok()
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_fools_mate_is_black_win() {
        let mut white = Scripted { moves: vec!["f2f3", "g2g4"] };
        let mut black = Scripted { moves: vec!["e7e5", "d8h4"] };
        assert_eq!(play_game(&mut white, &mut black, 100), GameResult::BlackWins);
    }

    #[test]
    fn test_ply_limit_gives_no_result() {
        let mut white = RandomPlayer::new(1);
        let mut black = RandomPlayer::new(2);
        assert_eq!(play_game(&mut white, &mut black, 0), GameResult::NoResult);
    }

    #[test]
    fn test_illegal_choice_forfeits() {
        let mut white = Scripted { moves: vec![] };
        let mut black = RandomPlayer::new(3);
        assert_eq!(play_game(&mut white, &mut black, 10), GameResult::BlackWins);
    }

    #[test]
    fn test_game_ends_on_terminal_position() {
        let mut pos = Position::from_fen("k7/8/1Q6/8/8/8/8/K7 b - - 0 1").expect("valid FEN");
        let mut white = RandomPlayer::new(4);
        let mut black = RandomPlayer::new(5);
        assert_eq!(play_game_from(&mut pos, &mut white, &mut black, 10), GameResult::Draw);
    }
}
