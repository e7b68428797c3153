use super::bitboards::AttackTables;
use super::*;

/// Outcome as seen from the side to move's legal move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    BlackWins,
    NoResult,
    WhiteWins,
    Draw,
}

impl GameResult {
    pub fn win_for(color: Color) -> GameResult {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameResult::NoResult
    }
}

impl Position {
    /// Is `square` attacked by any `enemy` piece? Each piece pattern is
    /// cast from the square itself and intersected with the matching enemy
    /// board; pawns use `friendly`'s capture direction for that reason.
    pub fn is_square_attacked(&self, square: usize, friendly: Color, enemy: Color) -> bool {
        let tables = AttackTables::get();
        let occupied = self.bitboards.all_occupied();
        let them = self.bitboards.side(enemy);

        let queens = them[Type::Queen.index()];
        tables.pawn_attacks(friendly, square) & them[Type::Pawn.index()] != 0
            || tables.knight(square) & them[Type::Knight.index()] != 0
            || tables.king(square) & them[Type::King.index()] != 0
            || tables.bishop(square, occupied) & (them[Type::Bishop.index()] | queens) != 0
            || tables.rook(square, occupied) & (them[Type::Rook.index()] | queens) != 0
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color, color.opposite())
    }

    /// Fully legal moves for the side to move.
    pub fn legal_moves(&mut self) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Every pseudo-legal candidate is played, the mover's king is tested,
    /// and the move is taken back.
    pub fn legal_moves_into(&mut self, moves: &mut MoveList) {
        let mut candidates = MoveList::new();
        self.pseudo_legal_moves_into(&mut candidates);
        moves.clear();

        let us = self.side_to_move;
        for mv in candidates {
            if self.fails_before_make(mv) {
                continue;
            }
            self.make_move(mv);
            let safe = !self.is_in_check(us);
            self.undo_last_move();
            if safe {
                moves.push(mv);
            }
        }
    }

    /// Cheap rejections that need no make/undo.
    fn fails_before_make(&self, mv: Move) -> bool {
        let us = self.side_to_move;
        match mv.piece() {
            // Castles have already checked their own path
            Type::King if !mv.is_castle() => {
                self.is_square_attacked(mv.target(), us, us.opposite())
            }
            Type::Pawn => mv.is_capture() && file_of(mv.source()) == file_of(mv.target()),
            _ => false,
        }
    }

    /// Source and target of every legal move.
    pub fn move_pairs(&mut self) -> Vec<(usize, usize)> {
        self.legal_moves()
            .iter()
            .map(|m| (m.source(), m.target()))
            .collect()
    }

    /// Classify the position from the side to move's legal moves. Only the
    /// side to move is examined.
    pub fn check_winner(&self, moves: &[Move]) -> GameResult {
        if !moves.is_empty() {
            return GameResult::NoResult;
        }
        let us = self.side_to_move;
        if self.is_in_check(us) {
            GameResult::win_for(us.opposite())
        } else {
            GameResult::Draw
        }
    }

    pub fn game_result(&mut self) -> GameResult {
        let moves = self.legal_moves();
        self.check_winner(&moves)
    }
}
