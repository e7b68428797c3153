use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Square index from its name, e.g. `sq("e4") == 28`
pub fn sq(name: &str) -> usize {
    parse_square(name).unwrap()
}

pub fn fen(text: &str) -> Position {
    Position::from_fen(text).unwrap_or_else(|e| panic!("bad test FEN {text}: {e}"))
}

/// Check if a move between two squares exists in the move list
pub fn has_move(moves: &[Move], from: usize, to: usize) -> bool {
    moves.iter().any(|m| m.source() == from && m.target() == to)
}

/// Legal moves of the piece standing on `from`
pub fn moves_from(pos: &mut Position, from: usize) -> Vec<Move> {
    pos.legal_moves().into_iter().filter(|m| m.source() == from).collect()
}

/// Play a move given in coordinate notation; it must be legal
pub fn play(pos: &mut Position, text: &str) -> Move {
    let mv = pos
        .find_move(text)
        .unwrap_or_else(|e| panic!("{text} should be playable: {e}\n{pos}"));
    pos.make_move(mv);
    mv
}

// ==================== TEST MODULES ====================

mod make_undo;
mod castling;
mod check_detection;
mod perft;
