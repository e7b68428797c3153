use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==================== MAKE / UNDO TESTS ====================

const POSITIONS: [&str; 5] = [
    STARTING_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

#[test]
fn test_make_undo_restores_every_legal_move() {
    for text in POSITIONS {
        let mut pos = fen(text);
        let before = pos.clone();
        for mv in pos.legal_moves() {
            pos.make_move(mv);
            assert_ne!(pos.side_to_move(), before.side_to_move());
            assert_eq!(pos.history().len(), before.history().len() + 1);
            assert_eq!(pos.undo_last_move(), Some(mv));
            assert_eq!(pos, before, "{} did not undo cleanly in {}", mv, text);
        }
    }
}

#[test]
fn test_random_walk_unwinds_to_start() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _game in 0..8 {
        let mut pos = Position::default();
        let mut snapshots = Vec::new();

        for _ply in 0..120 {
            let moves = pos.legal_moves();
            if moves.is_empty() {
                break;
            }
            snapshots.push(pos.clone());
            let mv = moves[rng.gen_range(0..moves.len())];
            pos.make_move(mv);
            // Serialising sanity-checks that no square holds two pieces
            let _ = pos.board_array();
        }

        while let Some(expected) = snapshots.pop() {
            pos.undo_last_move();
            assert_eq!(pos, expected);
        }
        assert_eq!(pos, Position::default());
    }
}

#[test]
fn test_undo_with_empty_history() {
    let mut pos = Position::default();
    assert_eq!(pos.undo_last_move(), None);
    assert_eq!(pos, Position::default());
}

#[test]
fn test_capture_undo_restores_victim() {
    let mut pos = fen("4k3/8/8/3p4/8/2N5/8/4K3 w - - 0 1");
    let start = pos.clone();
    let mv = play(&mut pos, "c3d5");
    assert_eq!(mv.captured(), Some(Type::Pawn));
    assert_eq!(pos.piece_at(sq("d5")), Some(Piece::new(Color::White, Type::Knight)));
    assert_eq!(pos.bitboards().pieces_of_type(Color::Black, Type::Pawn), 0);

    pos.undo_last_move();
    assert_eq!(pos, start);
    assert_eq!(pos.piece_at(sq("d5")), Some(Piece::new(Color::Black, Type::Pawn)));
}

#[test]
fn test_reset_returns_to_start() {
    let mut pos = Position::default();
    play(&mut pos, "e2e4");
    play(&mut pos, "e7e5");
    pos.reset();
    assert_eq!(pos, Position::default());
}
