
use crate::game_repr::Position;

fn fen(text: &str) -> Position {
    Position::from_fen(text).expect("valid FEN")
}
