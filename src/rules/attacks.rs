use crate::chess::piece::{Color, PieceKind, BISHOP_DIRS, KNIGHT_DELTAS, ROOK_DIRS};
use crate::core::coord::{Coord, KING_STEPS};
use crate::core::position::Position;
use crate::core::square::Square;

/// True iff any piece of colour `by` attacks `target`.
///
/// Pure geometry: whose turn it is, pins and the attacker's own king safety are
/// all ignored.
pub fn is_square_attacked(pos: &Position, target: Square, by: Color) -> bool {
    attacked_by_pawn(pos, target, by)
        || attacked_by_leaper(pos, target, by, PieceKind::Knight, &KNIGHT_DELTAS)
        || attacked_by_leaper(pos, target, by, PieceKind::King, &KING_STEPS)
        || attacked_along_rays(pos, target, by, &ROOK_DIRS, PieceKind::Rook)
        || attacked_along_rays(pos, target, by, &BISHOP_DIRS, PieceKind::Bishop)
}

fn attacked_by_pawn(pos: &Position, target: Square, by: Color) -> bool {
    // A pawn attacks diagonally forward, so look one row "behind" the target.
    [-1, 1].into_iter().any(|dx| {
        target
            .offset(Coord::new(dx, -by.forward()))
            .and_then(|sq| pos.piece_at(sq))
            .is_some_and(|p| p.is(by, PieceKind::Pawn))
    })
}

fn attacked_by_leaper(
    pos: &Position,
    target: Square,
    by: Color,
    kind: PieceKind,
    deltas: &[Coord],
) -> bool {
    deltas.iter().any(|&d| {
        target
            .offset(d)
            .and_then(|sq| pos.piece_at(sq))
            .is_some_and(|p| p.is(by, kind))
    })
}

/// Walk each ray from `target` to the first occupied square; a `slider` or a
/// queen of colour `by` there attacks `target`.
fn attacked_along_rays(
    pos: &Position,
    target: Square,
    by: Color,
    dirs: &[Coord],
    slider: PieceKind,
) -> bool {
    for &dir in dirs {
        let mut cur = target.offset(dir);
        while let Some(sq) = cur {
            if let Some(p) = pos.piece_at(sq) {
                if p.color == by && (p.kind == slider || p.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cur = sq.offset(dir);
        }
    }
    false
}
