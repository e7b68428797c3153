use std::fmt;

use rayon::prelude::*;

use super::bitboards::{bitscan_forward, Bitboards};
use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD STATE AND MOVE MECHANICS
 */

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) bitboards: Bitboards,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    /// Applied moves, oldest first. Each carries the rights it replaced.
    pub(crate) history: Vec<Move>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            bitboards: Bitboards::starting(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            history: Vec::new(),
        }
    }
}

impl Position {
    /// Board with no pieces, White to move and no castling rights.
    pub fn empty() -> Self {
        Self {
            bitboards: Bitboards::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            history: Vec::new(),
        }
    }

    /// Back to the standard starting setup.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut pos = Position::empty();
        for (row, text) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0usize;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::RankWidth { rank: rank + 1 });
                    }
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::BadPiece(c))?;
                    if file >= 8 {
                        return Err(FenError::RankWidth { rank: rank + 1 });
                    }
                    pos.bitboards.add_piece(piece.color, piece.piece_type, rank * 8 + file);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth { rank: rank + 1 });
            }
        }

        for color in [Color::White, Color::Black] {
            let kings = pos.bitboards.pieces_of_type(color, Type::King).count_ones();
            if kings != 1 {
                return Err(FenError::KingCount(color, kings));
            }
        }

        pos.side_to_move = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::BadSide(other.to_string())),
        };

        // The side that just moved cannot have left its king attacked
        let waiting = pos.side_to_move.opposite();
        if pos.is_in_check(waiting) {
            return Err(FenError::OpponentInCheck(waiting));
        }

        if let Some(field) = parts.next() {
            if field != "-" {
                for c in field.chars() {
                    let (color, side) = match c {
                        'K' => (Color::White, CastleSide::KingSide),
                        'Q' => (Color::White, CastleSide::QueenSide),
                        'k' => (Color::Black, CastleSide::KingSide),
                        'q' => (Color::Black, CastleSide::QueenSide),
                        _ => return Err(FenError::BadCastling(field.to_string())),
                    };
                    pos.castling.set(color, side);
                }
            }
        }

        if let Some(field) = parts.next() {
            if field != "-" {
                pos.push_en_passant_origin(field)?;
            }
        }

        Ok(pos)
    }

    /// The en passant rule reads the previous move, so a FEN target square
    /// is turned into the double push that would have produced it.
    fn push_en_passant_origin(&mut self, field: &str) -> Result<(), FenError> {
        let bad = || FenError::BadEnPassant(field.to_string());
        let target = parse_square(field).map_err(|_| bad())?;

        let pusher = self.side_to_move.opposite();
        let (from, to) = match pusher {
            Color::White if rank_of(target) == 2 => (target - 8, target + 8),
            Color::Black if rank_of(target) == 5 => (target + 8, target - 8),
            _ => return Err(bad()),
        };
        if self.bitboards.type_at(pusher, to) != Some(Type::Pawn) {
            return Err(bad());
        }

        let origin = Move::new(from, to, Type::Pawn, MoveKind::Quiet, self.castling);
        self.history.push(origin);
        Ok(())
    }

    pub fn to_fen(&self) -> String {
        let board = self.board_array();
        let mut fen = String::new();

        for (row, cells) in board.iter().enumerate() {
            let mut empty = 0;
            for &c in cells {
                if c == '.' {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    fen.push_str(&empty.to_string());
                    empty = 0;
                }
                fen.push(c);
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let en_passant = match self.history.last() {
            Some(last) if last.is_double_push() => {
                square_name((last.source() + last.target()) / 2)
            }
            _ => "-".to_string(),
        };

        format!("{} {} {} {} 0 1", fen, side, self.castling.to_fen(), en_passant)
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline(always)]
    pub fn bitboards(&self) -> &Bitboards {
        &self.bitboards
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn piece_at(&self, square: usize) -> Option<Piece> {
        self.bitboards.piece_at(square)
    }

    /// Put a piece on an empty square. For setting up positions by hand.
    pub fn put_piece(&mut self, square: usize, piece: Piece) {
        assert!(
            self.piece_at(square).is_none(),
            "square {} is already occupied",
            square_name(square)
        );
        self.bitboards.add_piece(piece.color, piece.piece_type, square);
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    /// Apply a move produced by `legal_moves` on this same position.
    pub fn make_move(&mut self, mv: Move) {
        let us = self.side_to_move;
        let them = us.opposite();
        let (from, to) = (mv.source(), mv.target());
        let mut rights = self.castling;

        debug_assert_eq!(mv.rights_before(), rights, "move {} is stale", mv);

        match mv.kind() {
            MoveKind::Quiet => {
                self.bitboards.move_piece(us, mv.piece(), from, to);
            }
            MoveKind::Capture(captured) => {
                self.bitboards.remove_piece(them, captured, to);
                self.bitboards.move_piece(us, mv.piece(), from, to);
                if captured == Type::Rook {
                    rights.clear_rook_corner(to);
                }
            }
            MoveKind::Promotion { piece, captured } => {
                if let Some(captured) = captured {
                    self.bitboards.remove_piece(them, captured, to);
                    if captured == Type::Rook {
                        rights.clear_rook_corner(to);
                    }
                }
                self.bitboards.remove_piece(us, Type::Pawn, from);
                self.bitboards.add_piece(us, piece, to);
            }
            MoveKind::Castle(side) => {
                let sq = CastleSquares::of(us, side);
                self.bitboards.move_piece(us, Type::King, sq.king_from, sq.king_to);
                self.bitboards.move_piece(us, Type::Rook, sq.rook_from, sq.rook_to);
            }
            MoveKind::EnPassant => {
                self.bitboards.remove_piece(them, Type::Pawn, en_passant_victim(us, to));
                self.bitboards.move_piece(us, Type::Pawn, from, to);
            }
        }

        match mv.piece() {
            Type::King => rights.clear_color(us),
            Type::Rook => rights.clear_rook_corner(from),
            _ => {}
        }

        self.castling = rights;
        self.history.push(mv);
        self.side_to_move = them;
    }

    /// Take back the most recent move. Returns it, or `None` when the
    /// history is empty.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.side_to_move = self.side_to_move.opposite();

        let us = self.side_to_move;
        let them = us.opposite();
        let (from, to) = (mv.source(), mv.target());

        match mv.kind() {
            MoveKind::Quiet => {
                self.bitboards.move_piece(us, mv.piece(), to, from);
            }
            MoveKind::Capture(captured) => {
                self.bitboards.move_piece(us, mv.piece(), to, from);
                self.bitboards.add_piece(them, captured, to);
            }
            MoveKind::Promotion { piece, captured } => {
                self.bitboards.remove_piece(us, piece, to);
                self.bitboards.add_piece(us, Type::Pawn, from);
                if let Some(captured) = captured {
                    self.bitboards.add_piece(them, captured, to);
                }
            }
            MoveKind::Castle(side) => {
                let sq = CastleSquares::of(us, side);
                self.bitboards.move_piece(us, Type::Rook, sq.rook_to, sq.rook_from);
                self.bitboards.move_piece(us, Type::King, sq.king_to, sq.king_from);
            }
            MoveKind::EnPassant => {
                self.bitboards.move_piece(us, Type::Pawn, to, from);
                self.bitboards.add_piece(them, Type::Pawn, en_passant_victim(us, to));
            }
        }

        self.castling = mv.rights_before();
        Some(mv)
    }

    /// 8x8 grid of FEN letters, `.` for empty. Row 0 is rank 8, column 0
    /// is file a.
    pub fn board_array(&self) -> [[char; 8]; 8] {
        let mut board = [['.'; 8]; 8];
        for (row, cells) in board.iter_mut().enumerate() {
            let rank = 7 - row;
            for (file, cell) in cells.iter_mut().enumerate() {
                let square = rank * 8 + file;
                if self.bitboards.occupancy_count(square) > 1 {
                    panic!("more than one piece on {}", square_name(square));
                }
                if let Some(piece) = self.piece_at(square) {
                    *cell = piece.to_char();
                }
            }
        }
        board
    }

    /// Same grid as `Display`, with `X` on each square the piece on
    /// `square` can legally move to.
    pub fn highlight_piece_moves(&self, square: usize) -> String {
        let mut scratch = self.clone();
        let mut board = self.board_array();
        for mv in scratch.legal_moves().iter().filter(|m| m.source() == square) {
            let to = mv.target();
            board[7 - rank_of(to)][file_of(to)] = 'X';
        }
        render_grid(self.side_to_move, &board)
    }

    /// Resolve coordinate text such as `e2e4` or `a7a8n` against the
    /// legal moves. A promotion without a suffix means the queen.
    pub fn find_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let text = text.trim();
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(MoveParseError::BadFormat(text.to_string()));
        }
        let from = parse_square(&text[0..2])?;
        let to = parse_square(&text[2..4])?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Type::from_char(c) {
                Some(t) if Type::PROMOTIONS.contains(&t) => Some(t),
                _ => return Err(MoveParseError::BadFormat(text.to_string())),
            },
        };

        self.legal_moves()
            .into_iter()
            .filter(|m| m.source() == from && m.target() == to)
            .find(|m| match (m.promotion(), promotion) {
                (None, None) => true,
                (Some(p), Some(wanted)) => p == wanted,
                (Some(p), None) => p == Type::Queen,
                (None, Some(_)) => false,
            })
            .ok_or_else(|| MoveParseError::Illegal(text.to_string()))
    }

    /// Leaf count of the legal move tree.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        // Bulk counting at the last ply
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_last_move();
        }
        nodes
    }

    /// Perft split by root move, for comparing against another generator.
    pub fn divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let moves = self.legal_moves();
        let mut split = Vec::with_capacity(moves.len());
        for mv in moves {
            self.make_move(mv);
            split.push((mv, self.perft(depth - 1)));
            self.undo_last_move();
        }
        split
    }

    /// Perft with the root moves spread over the rayon pool, each worker
    /// on its own copy of the position.
    pub fn perft_parallel(&self, depth: u32) -> u64 {
        if depth <= 1 {
            return self.clone().perft(depth);
        }
        let moves = self.clone().legal_moves();
        moves
            .as_slice()
            .par_iter()
            .map(|&mv| {
                let mut pos = self.clone();
                pos.make_move(mv);
                pos.perft(depth - 1)
            })
            .sum()
    }

    /// Colour-flipped copy: board mirrored top to bottom, colours, rights
    /// and side to move swapped. History is dropped.
    pub fn mirrored(&self) -> Position {
        Position {
            bitboards: self.bitboards.mirrored(),
            side_to_move: self.side_to_move.opposite(),
            castling: self.castling.mirrored(),
            history: Vec::new(),
        }
    }

    /// Square of `color`'s king. Every position has exactly one.
    pub fn king_square(&self, color: Color) -> usize {
        let kings = self.bitboards.pieces_of_type(color, Type::King);
        if kings == 0 {
            panic!("{:?} has no king", color);
        }
        bitscan_forward(kings)
    }
}

/// Square of the pawn taken by an en passant capture landing on `to`.
#[inline]
pub fn en_passant_victim(capturer: Color, to: usize) -> usize {
    match capturer {
        Color::White => to - 8,
        Color::Black => to + 8,
    }
}

fn render_grid(side: Color, board: &[[char; 8]; 8]) -> String {
    let mut out = format!("Current Turn: {:?}\n", side);
    for cells in board {
        let row: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_grid(self.side_to_move, &self.board_array()))
    }
}
