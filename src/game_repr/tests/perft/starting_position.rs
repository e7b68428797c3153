use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================

#[test]
fn test_perft_starting_position_depth_1() {
    let mut pos = Position::default();
    assert_eq!(pos.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let mut pos = Position::default();
    assert_eq!(pos.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let mut pos = Position::default();
    assert_eq!(pos.perft(3), 8902);
}

#[test]
fn test_perft_starting_position_depth_4() {
    let mut pos = Position::default();
    assert_eq!(pos.perft(4), 197281);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_starting_position_depth_5() {
    let mut pos = Position::default();
    assert_eq!(pos.perft(5), 4865609);
}

#[test]
fn test_perft_leaves_position_untouched() {
    let mut pos = Position::default();
    pos.perft(3);
    assert_eq!(pos, Position::default());
}

#[test]
fn test_divide_sums_to_perft() {
    let mut pos = Position::default();
    let split = pos.divide(3);
    assert_eq!(split.len(), 20);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 8902);

    let e2e4 = split.iter().find(|(m, _)| m.to_uci() == "e2e4").unwrap();
    assert_eq!(e2e4.1, 600);
}

#[test]
fn test_parallel_perft_agrees() {
    let pos = Position::default();
    assert_eq!(pos.perft_parallel(3), 8902);
    let kiwipete = fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    assert_eq!(kiwipete.perft_parallel(2), 2039);
}

#[test]
fn test_mirrored_position_has_same_tree() {
    let mut pos = fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1");
    let mut mirrored = pos.mirrored();
    assert_eq!(mirrored.side_to_move(), Color::Black);
    assert_eq!(mirrored.castling_rights().to_fen(), "KQ");
    assert_eq!(mirrored.perft(3), pos.perft(3));
}
