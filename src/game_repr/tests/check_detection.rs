use super::*;

// ==================== CHECK DETECTION TESTS ====================

#[test]
fn test_check_from_each_piece_kind() {
    let checks = [
        ("4k3/8/8/8/8/8/8/r3K3 w - - 0 1", true),  // rook along the rank
        ("4k3/8/8/8/8/8/3b4/4K3 w - - 0 1", true), // bishop on the diagonal
        ("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1", true), // knight
        ("4k3/8/8/8/8/8/5p2/4K3 w - - 0 1", true), // pawn
        ("4k3/8/8/8/8/8/4p3/4K3 w - - 0 1", false), // pawn straight ahead
        ("4k3/8/8/8/8/8/8/r2NK3 w - - 0 1", false), // rook blocked
        ("4k3/8/8/8/8/8/8/4K3 w - - 0 1", false),
    ];
    for (text, expected) in checks {
        let pos = fen(text);
        assert_eq!(pos.is_in_check(Color::White), expected, "{}", text);
    }
}

#[test]
fn test_square_attack_lookup() {
    let pos = Position::default();
    // e3 is covered by the d2 and f2 pawns
    assert!(pos.is_square_attacked(sq("e3"), Color::Black, Color::White));
    assert!(pos.is_square_attacked(sq("f3"), Color::Black, Color::White));
    assert!(!pos.is_square_attacked(sq("e5"), Color::Black, Color::White));
    assert!(pos.is_square_attacked(sq("f6"), Color::White, Color::Black));
    assert!(!pos.is_square_attacked(sq("e4"), Color::White, Color::Black));
}

#[test]
fn test_only_evasions_are_legal() {
    let mut pos = fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 3);
    for to in ["d2", "e2", "f2"] {
        assert!(has_move(&moves, sq("e1"), sq(to)));
    }
}

#[test]
fn test_block_or_capture_the_checker() {
    // Rook e8 checks e1: the bishop blocks on e2 or takes on e8, the rook
    // blocks on e4
    let mut pos = fen("k3r3/8/8/1B6/1R6/8/8/4K3 w - - 0 1");
    let moves = pos.legal_moves();
    assert!(has_move(&moves, sq("b5"), sq("e2")));
    assert!(has_move(&moves, sq("b5"), sq("e8")));
    assert!(has_move(&moves, sq("b4"), sq("e4")));
    for mv in moves.iter().filter(|m| m.piece() != Type::King) {
        assert_eq!(file_of(mv.target()), 4, "{} does not answer the check", mv);
    }
}

#[test]
fn test_kings_keep_their_distance() {
    let mut pos = fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 5);
    for to in ["c4", "d4", "e4"] {
        assert!(!has_move(&moves, sq("d3"), sq(to)));
    }
}

#[test]
fn test_king_cannot_take_defended_piece() {
    let mut pos = fen("4k3/8/8/8/8/2b5/3q4/4K3 w - - 0 1");
    assert!(!has_move(&pos.legal_moves(), sq("e1"), sq("d2")));
}

#[test]
fn test_king_cannot_retreat_along_checking_line() {
    // a4 bishop checks c2; d1 stays on the same diagonal
    let mut pos = fen("4k3/8/8/8/b7/8/2K5/8 w - - 0 1");
    assert!(pos.is_in_check(Color::White));
    let moves = pos.legal_moves();
    assert!(!has_move(&moves, sq("c2"), sq("d1")));
    assert!(!has_move(&moves, sq("c2"), sq("b3")));
    assert!(has_move(&moves, sq("c2"), sq("c1")));
}
