use super::MoveList;
use crate::game_repr::bitboards::{promotion_mask, squares, AttackTables};
use crate::game_repr::{file_of, rank_of, Move, MoveKind, Position, Type};

impl Position {
    /// Pushes, diagonal captures, promotions and en passant for the pawn on
    /// `square`.
    pub(crate) fn pawn_moves_into(&self, square: usize, moves: &mut MoveList) {
        let us = self.side_to_move;
        let tables = AttackTables::get();
        let enemy = self.bitboards.occupied_by_color(us.opposite());
        let occupied = self.bitboards.all_occupied();

        let targets =
            tables.pawn_pushes(us, square, occupied) | (tables.pawn_attacks(us, square) & enemy);

        let last_rank = promotion_mask(us);

        for to in squares(targets) {
            let captured = if enemy & (1u64 << to) != 0 {
                Some(self.captured_on(to))
            } else {
                None
            };

            if last_rank & (1u64 << to) != 0 {
                // Queen first: it is the default promotion
                for piece in Type::PROMOTIONS {
                    let kind = MoveKind::Promotion { piece, captured };
                    moves.push(Move::new(square, to, Type::Pawn, kind, self.castling));
                }
            } else {
                let kind = captured.map_or(MoveKind::Quiet, MoveKind::Capture);
                moves.push(Move::new(square, to, Type::Pawn, kind, self.castling));
            }
        }

        if let Some(to) = self.en_passant_target(square) {
            moves.push(Move::new(square, to, Type::Pawn, MoveKind::EnPassant, self.castling));
        }
    }

    /// Where the pawn on `square` lands capturing en passant, if the
    /// previous move was an enemy double push ending right beside it.
    pub fn en_passant_target(&self, square: usize) -> Option<usize> {
        let last = self.history.last()?;
        if !last.is_double_push() {
            return None;
        }

        let landed = last.target();
        if self.bitboards.type_at(self.side_to_move.opposite(), landed) != Some(Type::Pawn) {
            return None;
        }
        if rank_of(landed) != rank_of(square) || file_of(landed).abs_diff(file_of(square)) != 1 {
            return None;
        }

        Some((last.source() + landed) / 2)
    }
}
