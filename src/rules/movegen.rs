use std::fmt;
use std::str::FromStr;

use crate::chess::castling::{king_start, CastleSide};
use crate::chess::piece::{Color, PieceKind, KNIGHT_DELTAS};
use crate::core::coord::{Coord, KING_STEPS};
use crate::core::position::Position;
use crate::core::square::Square;
use crate::core::square_set::SquareSet;
use crate::error::ChessError;

use super::attacks::is_square_attacked;

/// A move in coordinate form (`e2e4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parses `e2e4`. A trailing promotion letter (`e7e8q`) is accepted and dropped:
/// pawns always promote to a queen.
impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessError::InvalidMove(s.to_string());
        if !s.is_ascii() {
            return Err(invalid());
        }
        match s.len() {
            4 => {}
            5 if matches!(s.as_bytes()[4], b'q' | b'r' | b'b' | b'n') => {}
            _ => return Err(invalid()),
        }
        let from = s[0..2].parse().map_err(|_| invalid())?;
        let to = s[2..4].parse().map_err(|_| invalid())?;
        Ok(Move::new(from, to))
    }
}

/// Destinations for the piece on `from` before the self-check filter.
///
/// Moves are generated for the piece's own colour, whoever is to move.
pub fn pseudo_legal_destinations(pos: &Position, from: Square) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let Some(piece) = pos.piece_at(from) else {
        return out;
    };
    let color = piece.color;

    match piece.kind {
        PieceKind::Pawn => pawn_destinations(pos, from, color, &mut out),
        PieceKind::Knight => leaper_destinations(pos, from, color, &KNIGHT_DELTAS, &mut out),
        PieceKind::King => {
            leaper_destinations(pos, from, color, &KING_STEPS, &mut out);
            castling_destinations(pos, from, color, &mut out);
        }
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
            for &dir in piece.kind.slide_dirs() {
                let mut cur = from.offset(dir);
                while let Some(to) = cur {
                    match pos.piece_at(to) {
                        None => out.insert(to),
                        Some(p) => {
                            if p.color != color {
                                out.insert(to);
                            }
                            break;
                        }
                    }
                    cur = to.offset(dir);
                }
            }
        }
    }

    out
}

fn pawn_destinations(pos: &Position, from: Square, color: Color, out: &mut SquareSet) {
    let fwd = color.forward();

    if let Some(one) = from.offset(Coord::new(0, fwd)) {
        if pos.is_empty(one) {
            out.insert(one);
            if from.row() == color.pawn_row() {
                if let Some(two) = one.offset(Coord::new(0, fwd)) {
                    if pos.is_empty(two) {
                        out.insert(two);
                    }
                }
            }
        }
    }

    for dx in [-1, 1] {
        let Some(to) = from.offset(Coord::new(dx, fwd)) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(p) if p.color != color => out.insert(to),
            Some(_) => {}
            // The target only exists for the side to move, right after the
            // opponent's double step.
            None if pos.en_passant() == Some(to) && pos.side_to_move() == color => {
                out.insert(to)
            }
            None => {}
        }
    }
}

fn leaper_destinations(
    pos: &Position,
    from: Square,
    color: Color,
    deltas: &[Coord],
    out: &mut SquareSet,
) {
    for &d in deltas {
        let Some(to) = from.offset(d) else {
            continue;
        };
        if pos.piece_at(to).map_or(true, |p| p.color != color) {
            out.insert(to);
        }
    }
}

fn castling_destinations(pos: &Position, from: Square, color: Color, out: &mut SquareSet) {
    if from != king_start(color) || pos.castling().king_moved(color) {
        return;
    }
    let enemy = color.other();
    let row = color.back_row();

    for side in CastleSide::BOTH {
        if !pos.castling().available(color, side) {
            continue;
        }
        let rook_from = side.rook_from(color);
        if !pos
            .piece_at(rook_from)
            .is_some_and(|p| p.is(color, PieceKind::Rook))
        {
            continue;
        }

        let (lo, hi) = min_max(from.col(), rook_from.col());
        let path_clear = (lo + 1..hi).all(|col| pos.is_empty(Square::from_row_col(row, col)));
        if !path_clear {
            continue;
        }

        // Start, transit and destination squares of the king.
        let king_to = side.king_to(color);
        let (k_lo, k_hi) = min_max(from.col(), king_to.col());
        let king_path_safe = (k_lo..=k_hi)
            .all(|col| !is_square_attacked(pos, Square::from_row_col(row, col), enemy));
        if king_path_safe {
            out.insert(king_to);
        }
    }
}

#[inline]
fn min_max(a: u8, b: u8) -> (u8, u8) {
    (a.min(b), a.max(b))
}

/// Legal destinations for the piece on `from`: pseudo-legal moves that do not
/// leave its own king attacked.
///
/// Each candidate is applied to a copy of `pos`; `pos` itself is never touched.
pub fn legal_destinations(pos: &Position, from: Square) -> SquareSet {
    let Some(piece) = pos.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    let color = piece.color;

    pseudo_legal_destinations(pos, from)
        .iter()
        .filter(|&to| {
            let next = pos.apply(from, to);
            match next.king_square(color) {
                Some(k) => !is_square_attacked(&next, k, color.other()),
                None => true,
            }
        })
        .collect()
}

/// Every legal move for the side to move, ordered by origin then destination.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let color = pos.side_to_move();
    let mut out = Vec::new();
    for (from, piece) in pos.pieces() {
        if piece.color != color {
            continue;
        }
        out.extend(legal_destinations(pos, from).iter().map(|to| Move::new(from, to)));
    }
    out
}

/// Number of leaf positions of the legal move tree `depth` plies deep.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(pos);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&pos.apply(mv.from, mv.to), depth - 1))
        .sum()
}
