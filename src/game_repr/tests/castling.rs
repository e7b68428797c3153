use super::*;

// ==================== CASTLING TESTS ====================

const OPEN_CORNERS: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

fn castles(pos: &mut Position) -> Vec<Move> {
    pos.legal_moves().into_iter().filter(|m| m.is_castle()).collect()
}

#[test]
fn test_both_sides_castle_when_clear() {
    let mut pos = fen(OPEN_CORNERS);
    let white = castles(&mut pos);
    assert_eq!(white.len(), 2);
    assert!(has_move(&white, sq("e1"), sq("g1")));
    assert!(has_move(&white, sq("e1"), sq("c1")));

    pos.set_side_to_move(Color::Black);
    let black = castles(&mut pos);
    assert_eq!(black.len(), 2);
    assert!(black
        .iter()
        .any(|m| m.castle_side() == Some(CastleSide::KingSide) && m.target() == sq("g8")));
    assert!(black
        .iter()
        .any(|m| m.castle_side() == Some(CastleSide::QueenSide) && m.target() == sq("c8")));
}

#[test]
fn test_castling_blocked_by_pieces() {
    // b1 and g1 occupied
    let mut pos = fen("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
    assert!(castles(&mut pos).is_empty());
}

#[test]
fn test_cannot_castle_out_of_check() {
    let mut pos = fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(castles(&mut pos).is_empty());
}

#[test]
fn test_cannot_castle_through_attacked_square() {
    // f1 is covered by the f8 rook; the queen side is untouched
    let mut pos = fen("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let white = castles(&mut pos);
    assert_eq!(white.len(), 1);
    assert!(has_move(&white, sq("e1"), sq("c1")));
}

#[test]
fn test_cannot_castle_into_attack() {
    let mut pos = fen("1k4r1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let white = castles(&mut pos);
    assert!(!has_move(&white, sq("e1"), sq("g1")));
    assert!(has_move(&white, sq("e1"), sq("c1")));
}

#[test]
fn test_attacked_b1_does_not_stop_queen_side() {
    // b1 must be empty but may be attacked
    let mut pos = fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(has_move(&castles(&mut pos), sq("e1"), sq("c1")));
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let mut pos = fen(OPEN_CORNERS);
    let before = pos.clone();
    play(&mut pos, "e1g1");

    assert_eq!(pos.piece_at(sq("g1")), Some(Piece::new(Color::White, Type::King)));
    assert_eq!(pos.piece_at(sq("f1")), Some(Piece::new(Color::White, Type::Rook)));
    assert_eq!(pos.piece_at(sq("h1")), None);
    assert_eq!(pos.piece_at(sq("e1")), None);
    assert_eq!(pos.castling_rights().to_fen(), "kq");

    pos.undo_last_move();
    assert_eq!(pos, before);

    play(&mut pos, "e1c1");
    assert_eq!(pos.piece_at(sq("c1")), Some(Piece::new(Color::White, Type::King)));
    assert_eq!(pos.piece_at(sq("d1")), Some(Piece::new(Color::White, Type::Rook)));
    assert_eq!(pos.piece_at(sq("a1")), None);
}

#[test]
fn test_right_stays_revoked_after_king_returns() {
    let mut pos = fen(OPEN_CORNERS);
    play(&mut pos, "e1f1");
    play(&mut pos, "e8f8");
    play(&mut pos, "f1e1");
    play(&mut pos, "f8e8");

    assert!(castles(&mut pos).is_empty());
    assert_eq!(pos.castling_rights(), CastlingRights::none());
}

#[test]
fn test_right_stays_revoked_after_rook_returns() {
    let mut pos = fen(OPEN_CORNERS);
    play(&mut pos, "h1g1");
    play(&mut pos, "h8g8");
    play(&mut pos, "g1h1");
    play(&mut pos, "g8h8");

    let white = castles(&mut pos);
    assert_eq!(white.len(), 1);
    assert!(has_move(&white, sq("e1"), sq("c1")));
    assert_eq!(pos.castling_rights().to_fen(), "Qq");
}

#[test]
fn test_capturing_rook_revokes_its_right() {
    let mut pos = fen(OPEN_CORNERS);
    play(&mut pos, "a1a8");
    // White's own a1 rook moved, Black's a8 rook was taken
    assert_eq!(pos.castling_rights().to_fen(), "Kk");
    assert!(castles(&mut pos).iter().all(|m| m.castle_side() == Some(CastleSide::KingSide)));
}

#[test]
fn test_castling_needs_rook_on_corner() {
    let mut pos = fen("4k3/8/8/8/8/8/8/4K3 w K - 0 1");
    assert!(castles(&mut pos).is_empty());
}

#[test]
fn test_undo_restores_rights_snapshot() {
    let mut pos = fen(OPEN_CORNERS);
    play(&mut pos, "e1e2");
    assert_eq!(pos.castling_rights().to_fen(), "kq");
    pos.undo_last_move();
    assert_eq!(pos.castling_rights(), CastlingRights::all());
    assert_eq!(castles(&mut pos).len(), 2);
}
