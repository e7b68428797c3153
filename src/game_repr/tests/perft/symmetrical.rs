use super::*;

// ==================== SYMMETRICAL PERFT TESTS ====================
// Quiet, mirrored middle game
const FEN: &str = "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10";

#[test]
fn test_perft_symmetrical_depth_1() {
    assert_eq!(fen(FEN).perft(1), 46);
}

#[test]
fn test_perft_symmetrical_depth_2() {
    assert_eq!(fen(FEN).perft(2), 2079);
}

#[test]
fn test_perft_symmetrical_depth_3() {
    assert_eq!(fen(FEN).perft(3), 89890);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_symmetrical_depth_4() {
    assert_eq!(fen(FEN).perft(4), 3894594);
}
