use std::fmt;

use super::{CastleSide, CastlingRights, MoveParseError, Type};

/*-------ARCHITECTURE--------*/

// A move is a plain value: squares, the piece that moves, what kind of move
// it is, and the castling rights that were in force before it was played.
// The kind is a tagged variant so promotion, castle and en passant can never
// be set together, and a captured piece only exists on capturing kinds.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    Capture(Type),
    Promotion { piece: Type, captured: Option<Type> },
    Castle(CastleSide),
    /// Always captures a pawn, which stands beside the target square.
    EnPassant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: u8,
    to: u8,
    piece: Type,
    kind: MoveKind,
    rights_before: CastlingRights,
}

impl Move {
    pub fn new(
        from: usize,
        to: usize,
        piece: Type,
        kind: MoveKind,
        rights_before: CastlingRights,
    ) -> Move {
        debug_assert!(from < 64 && to < 64);
        Self {
            from: from as u8,
            to: to as u8,
            piece,
            kind,
            rights_before,
        }
    }

    #[inline(always)]
    pub fn source(&self) -> usize {
        self.from as usize
    }

    #[inline(always)]
    pub fn target(&self) -> usize {
        self.to as usize
    }

    #[inline(always)]
    pub fn piece(&self) -> Type {
        self.piece
    }

    #[inline(always)]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Castling rights as they were before this move was made.
    pub fn rights_before(&self) -> CastlingRights {
        self.rights_before
    }

    pub fn is_capture(&self) -> bool {
        self.captured().is_some()
    }

    /// Kind of the piece removed by this move, if any.
    pub fn captured(&self) -> Option<Type> {
        match self.kind {
            MoveKind::Capture(t) => Some(t),
            MoveKind::Promotion { captured, .. } => captured,
            MoveKind::EnPassant => Some(Type::Pawn),
            MoveKind::Quiet | MoveKind::Castle(_) => None,
        }
    }

    pub fn promotion(&self) -> Option<Type> {
        match self.kind {
            MoveKind::Promotion { piece, .. } => Some(piece),
            _ => None,
        }
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion().is_some()
    }

    pub fn castle_side(&self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_castle(&self) -> bool {
        self.castle_side().is_some()
    }

    pub fn is_en_passant(&self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    /// Pawn move that skips a square.
    pub fn is_double_push(&self) -> bool {
        self.piece == Type::Pawn && self.from.abs_diff(self.to) == 16
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn to_uci(&self) -> String {
        let mut s = format!("{}{}", square_name(self.source()), square_name(self.target()));
        if let Some(p) = self.promotion() {
            s.push(p.to_char());
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}

#[inline(always)]
pub fn rank_of(square: usize) -> usize {
    square / 8
}

#[inline(always)]
pub fn file_of(square: usize) -> usize {
    square % 8
}

/// `0` -> `a1`, `63` -> `h8`.
pub fn square_name(square: usize) -> String {
    let file = (b'a' + file_of(square) as u8) as char;
    let rank = (b'1' + rank_of(square) as u8) as char;
    format!("{}{}", file, rank)
}

pub fn parse_square(text: &str) -> Result<usize, MoveParseError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(MoveParseError::BadSquare(text.to_string()));
    }
    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(MoveParseError::BadSquare(text.to_string()));
    }
    Ok((rank - b'1') as usize * 8 + (file - b'a') as usize)
}
