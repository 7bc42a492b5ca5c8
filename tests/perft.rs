//! Leaf counts of the legal move tree against published reference values.

use chess_rules::chess::fen::{parse_fen, START_FEN};
use chess_rules::core::position::Position;
use chess_rules::rules::movegen::perft;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ENDGAME_PINS: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

fn position(fen: &str) -> Position {
    parse_fen(fen).unwrap().0
}

#[test]
fn start_position_counts() {
    let pos = position(START_FEN);
    assert_eq!(perft(&pos, 1), 20);
    assert_eq!(perft(&pos, 2), 400);
    assert_eq!(perft(&pos, 3), 8_902);
    assert_eq!(perft(&pos, 4), 197_281);
}

#[test]
fn kiwipete_counts() {
    // Castling, pins and en passant all at once.
    let pos = position(KIWIPETE);
    assert_eq!(perft(&pos, 1), 48);
    assert_eq!(perft(&pos, 2), 2_039);
}

#[test]
fn endgame_with_rank_pins_counts() {
    let pos = position(ENDGAME_PINS);
    assert_eq!(perft(&pos, 1), 14);
    assert_eq!(perft(&pos, 2), 191);
    assert_eq!(perft(&pos, 3), 2_812);
}
