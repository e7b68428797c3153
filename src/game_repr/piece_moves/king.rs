use super::MoveList;
use crate::game_repr::{CastleSide, CastleSquares, Move, MoveKind, Position, Type};

impl Position {
    pub(crate) fn king_moves_into(&self, square: usize, moves: &mut MoveList) {
        self.step_and_slide_moves_into(Type::King, square, moves);
        self.castle_moves_into(moves);
    }

    /// A castle needs the right, king and rook on their home squares, an
    /// empty gap between them, and no attack on the king's three squares.
    fn castle_moves_into(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let them = us.opposite();
        let occupied = self.bitboards.all_occupied();

        for side in CastleSide::BOTH {
            if !self.castling.has(us, side) {
                continue;
            }

            let sq = CastleSquares::of(us, side);
            if self.bitboards.type_at(us, sq.king_from) != Some(Type::King)
                || self.bitboards.type_at(us, sq.rook_from) != Some(Type::Rook)
            {
                continue;
            }
            if occupied & sq.between != 0 {
                continue;
            }
            if sq.king_path.iter().any(|&s| self.is_square_attacked(s, us, them)) {
                continue;
            }

            moves.push(Move::new(
                sq.king_from,
                sq.king_to,
                Type::King,
                MoveKind::Castle(side),
                self.castling,
            ));
        }
    }
}
