//! Forsyth-Edwards notation, the position format external engines consume.

use crate::chess::castling::{CastleSide, CastlingRights};
use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::coord::Coord;
use crate::core::position::Position;
use crate::core::square::Square;
use crate::error::ChessError;
use crate::rules::checkmate::is_in_check;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock written on export. The fifty-move rule is not tracked.
pub const HALFMOVE_PLACEHOLDER: u32 = 0;

/// Largest full-move number accepted on import.
pub const MAX_FULLMOVE: usize = 1_000_000;

const CASTLING_LETTERS: [(Color, CastleSide, char); 4] = [
    (Color::White, CastleSide::KingSide, 'K'),
    (Color::White, CastleSide::QueenSide, 'Q'),
    (Color::Black, CastleSide::KingSide, 'k'),
    (Color::Black, CastleSide::QueenSide, 'q'),
];

/// Export `pos` as a single-line FEN string with the given full-move number.
pub fn to_fen(pos: &Position, fullmove: usize) -> String {
    let mut fen = String::with_capacity(90);

    for row in 0..8u8 {
        if row > 0 {
            fen.push('/');
        }
        let mut empty = 0u8;
        for col in 0..8u8 {
            match pos.piece_at(Square::from_row_col(row, col)) {
                None => empty += 1,
                Some(p) => {
                    if empty > 0 {
                        fen.push((b'0' + empty) as char);
                        empty = 0;
                    }
                    fen.push(p.to_char());
                }
            }
        }
        if empty > 0 {
            fen.push((b'0' + empty) as char);
        }
    }

    fen.push(' ');
    fen.push(pos.side_to_move().fen_char());

    fen.push(' ');
    let rights = pos.castling();
    let before = fen.len();
    for (color, side, letter) in CASTLING_LETTERS {
        if rights.available(color, side) {
            fen.push(letter);
        }
    }
    if fen.len() == before {
        fen.push('-');
    }

    fen.push(' ');
    match pos.en_passant() {
        Some(sq) => fen.push_str(&sq.to_string()),
        None => fen.push('-'),
    }

    fen.push_str(&format!(" {HALFMOVE_PLACEHOLDER} {fullmove}"));
    fen
}

/// Parse a six-field FEN string into a position and its full-move number.
///
/// A castling letter that is absent marks that side's rook as moved; a colour
/// with no letters at all gets its king marked as moved too.
pub fn parse_fen(fen: &str) -> Result<(Position, usize), ChessError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let [placement, side, castling, en_passant, halfmove, fullmove] = fields[..] else {
        return Err(invalid(format!("expected 6 fields, found {}", fields.len())));
    };

    let side_to_move = match side {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(invalid(format!("bad side to move {other:?}"))),
    };

    let mut pos = Position::empty(side_to_move);
    parse_placement(&mut pos, placement)?;
    pos.set_castling(parse_castling(castling)?);

    let ep = match en_passant {
        "-" => None,
        s => {
            let sq = s
                .parse::<Square>()
                .map_err(|_| invalid(format!("bad en-passant square {s:?}")))?;
            if !is_en_passant_target(&pos, sq) {
                return Err(invalid(format!("no double-stepped pawn behind en-passant square {s}")));
            }
            Some(sq)
        }
    };
    pos.set_en_passant(ep);

    halfmove
        .parse::<u32>()
        .map_err(|_| invalid(format!("bad halfmove clock {halfmove:?}")))?;
    let fullmove = fullmove
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_FULLMOVE).contains(n))
        .ok_or_else(|| invalid(format!("bad fullmove number {fullmove:?}")))?;

    for color in [Color::White, Color::Black] {
        let kings = pos
            .pieces()
            .filter(|(_, p)| p.is(color, PieceKind::King))
            .count();
        if kings != 1 {
            return Err(invalid(format!("{color:?} must have exactly one king, found {kings}")));
        }
    }

    if let Some((sq, _)) = pos
        .pieces()
        .find(|(sq, p)| p.kind == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7))
    {
        return Err(invalid(format!("pawn on back rank at {sq}")));
    }

    // The side that just moved cannot have left its own king attacked.
    if is_in_check(&pos, side_to_move.other()) {
        return Err(invalid(format!("{:?} king is in check with {side_to_move:?} to move", side_to_move.other())));
    }

    Ok((pos, fullmove))
}

fn parse_placement(pos: &mut Position, placement: &str) -> Result<(), ChessError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid(format!("expected 8 ranks, found {}", rows.len())));
    }

    for (row, text) in rows.iter().enumerate() {
        let mut col = 0u8;
        for c in text.chars() {
            if let Some(n) = c.to_digit(10).filter(|n| (1..=8).contains(n)) {
                col += n as u8;
            } else {
                let piece = Piece::from_char(c)
                    .ok_or_else(|| invalid(format!("bad piece letter {c:?}")))?;
                if col >= 8 {
                    return Err(invalid(format!("rank {} is too long", 8 - row)));
                }
                pos.set_piece(Square::from_row_col(row as u8, col), Some(piece));
                col += 1;
            }
            if col > 8 {
                return Err(invalid(format!("rank {} is too long", 8 - row)));
            }
        }
        if col != 8 {
            return Err(invalid(format!("rank {} is too short", 8 - row)));
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, ChessError> {
    // Letters must be a non-empty subsequence of "KQkq", in that order.
    let mut order = CASTLING_LETTERS.iter().map(|&(_, _, letter)| letter);
    let canonical = field
        .chars()
        .all(|c| order.by_ref().any(|letter| letter == c));
    if field != "-" && (field.is_empty() || !canonical) {
        return Err(invalid(format!("bad castling field {field:?}")));
    }

    let mut rights = CastlingRights::default();
    for color in [Color::White, Color::Black] {
        let mut any = false;
        for (_, side, letter) in CASTLING_LETTERS.iter().filter(|(c, ..)| *c == color) {
            if field.contains(*letter) {
                any = true;
            } else {
                rights.mark_rook(color, *side);
            }
        }
        if !any {
            rights.mark_king(color);
        }
    }
    Ok(rights)
}

/// An en-passant target must be empty, sit on the mover's sixth rank with the
/// square the enemy pawn left also empty, and have that pawn right in front of it.
fn is_en_passant_target(pos: &Position, sq: Square) -> bool {
    let mover = pos.side_to_move();
    let enemy = mover.other();
    let expected_row = match mover {
        Color::White => 2,
        Color::Black => 5,
    };
    let pawn_now = sq.offset(Coord::new(0, -mover.forward()));
    let pawn_was = sq.offset(Coord::new(0, mover.forward()));
    sq.row() == expected_row
        && pos.is_empty(sq)
        && pawn_was.is_some_and(|s| pos.is_empty(s))
        && pawn_now
            .and_then(|s| pos.piece_at(s))
            .is_some_and(|p| p.is(enemy, PieceKind::Pawn))
}

fn invalid(reason: String) -> ChessError {
    ChessError::InvalidFen { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_exports_the_standard_string() {
        assert_eq!(to_fen(&Position::starting(), 1), START_FEN);
    }

    #[test]
    fn import_then_export_is_stable() {
        for fen in [
            START_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w Kq e6 0 2",
        ] {
            let (pos, fullmove) = parse_fen(fen).unwrap();
            assert_eq!(to_fen(&pos, fullmove), fen);
        }
    }

    #[test]
    fn rejects_broken_strings() {
        for fen in [
            "",
            "8/8/8/8/8/8/8/8 w - - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KK - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w qK - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Qk- - 0 1",
        ] {
            assert!(parse_fen(fen).is_err(), "{fen:?} should be rejected");
        }
    }

    #[test]
    fn castling_subsets_in_order_are_accepted() {
        for field in ["K", "Qk", "Kq", "KQkq", "kq", "-"] {
            let fen = format!("r3k2r/8/8/8/8/8/8/R3K2R w {field} - 0 1");
            assert!(parse_fen(&fen).is_ok(), "{field:?} should be accepted");
        }
    }

    #[test]
    fn huge_fullmove_numbers_are_rejected() {
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 18446744073709551615").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1000001").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1000000").is_ok());
    }

    #[test]
    fn side_not_to_move_may_not_be_in_check() {
        assert!(parse_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").is_ok());
    }

    #[test]
    fn pawns_on_back_ranks_are_rejected() {
        assert!(parse_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/p3K3 w - - 0 1").is_err());
    }

    #[test]
    fn en_passant_square_needs_a_double_stepped_pawn() {
        // Occupied target.
        assert!(parse_fen("4k3/8/3n4/3pP3/8/8/8/4K3 w - d6 0 1").is_err());
        // No pawn in front of the target.
        assert!(parse_fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1").is_err());
        // Wrong rank for the side to move.
        assert!(parse_fen("4k3/8/8/8/3Pp3/8/8/4K3 w - d3 0 1").is_err());
        // The square the pawn came from is still occupied.
        assert!(parse_fen("4k3/3p4/8/3pP3/8/8/8/4K3 w - d6 0 1").is_err());
        assert!(parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").is_ok());
        assert!(parse_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1").is_ok());
    }
}
