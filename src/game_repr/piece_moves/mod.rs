pub mod king;
pub mod pawn;

use smallvec::SmallVec;

use super::bitboards::{squares, AttackTables};
use super::{square_name, Move, MoveKind, Position, Type};

/// Per-node move buffer. Spills to the heap past 64 moves.
pub type MoveList = SmallVec<[Move; 64]>;

impl Position {
    /// Moves that follow the movement rules but may leave the mover's king
    /// attacked. The buffer is cleared first.
    pub fn pseudo_legal_moves_into(&self, moves: &mut MoveList) {
        moves.clear();
        let us = self.side_to_move;

        for piece_type in Type::ALL {
            for square in squares(self.bitboards.pieces_of_type(us, piece_type)) {
                match piece_type {
                    Type::Pawn => self.pawn_moves_into(square, moves),
                    Type::King => self.king_moves_into(square, moves),
                    _ => self.step_and_slide_moves_into(piece_type, square, moves),
                }
            }
        }
    }

    /// Knight, bishop, rook, queen and the king's plain steps: every traced
    /// square not holding a friendly piece.
    fn step_and_slide_moves_into(&self, piece_type: Type, square: usize, moves: &mut MoveList) {
        let us = self.side_to_move;
        let own = self.bitboards.occupied_by_color(us);
        let enemy = self.bitboards.occupied_by_color(us.opposite());
        let occupied = own | enemy;

        let targets = AttackTables::get().trace(piece_type, us, square, occupied) & !own;
        for to in squares(targets) {
            let kind = if enemy & (1u64 << to) != 0 {
                MoveKind::Capture(self.captured_on(to))
            } else {
                MoveKind::Quiet
            };
            moves.push(Move::new(square, to, piece_type, kind, self.castling));
        }
    }

    /// Kind of the enemy piece standing on `square`. The caller has already
    /// seen an enemy bit there, so an empty square is a corrupt position.
    pub(crate) fn captured_on(&self, square: usize) -> Type {
        match self.bitboards.type_at(self.side_to_move.opposite(), square) {
            Some(t) => t,
            None => panic!("no piece to capture on {}", square_name(square)),
        }
    }
}
