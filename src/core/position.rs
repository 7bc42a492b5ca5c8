use std::fmt;

use crate::chess::castling::{CastleSide, CastlingRights};
use crate::chess::layout::starting_squares;
use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::square::Square;

/// One complete board state.
///
/// `Position` is `Copy`: legality checks simulate a move on a copy, and
/// [`Position::apply`] returns the next state instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
}

impl Position {
    /// The standard initial arrangement, white to move.
    pub fn starting() -> Self {
        Self {
            squares: starting_squares(),
            side_to_move: Color::White,
            castling: CastlingRights::default(),
            en_passant: None,
        }
    }

    /// An empty board. Only useful as a starting point for building a position.
    pub(crate) fn empty(side_to_move: Color) -> Self {
        Self {
            squares: [None; Square::COUNT],
            side_to_move,
            castling: CastlingRights::default(),
            en_passant: None,
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    pub(crate) fn set_castling(&mut self, castling: CastlingRights) {
        self.castling = castling;
    }

    pub(crate) fn set_en_passant(&mut self, en_passant: Option<Square>) {
        self.en_passant = en_passant;
    }

    /// Occupied squares in index order (a8 first).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.is(color, PieceKind::King))
            .map(|(sq, _)| sq)
    }

    /// The position after moving the piece on `from` to `to`.
    ///
    /// No legality check happens here; callers pass pseudo-legal moves. The
    /// returned position carries all of the move's side effects, including the
    /// rook hop of a castle and the pawn removed by an en-passant capture.
    pub fn apply(&self, from: Square, to: Square) -> Position {
        let mut next = *self;
        let Some(piece) = self.piece_at(from) else {
            return next;
        };

        next.set_piece(from, None);
        next.set_piece(to, Some(piece));
        next.castling = self.castling.after_move(from, to);

        match piece.kind {
            PieceKind::Pawn => {
                if Some(to) == self.en_passant && from.col() != to.col() {
                    // The captured pawn sits beside the mover, behind the target.
                    next.set_piece(Square::from_row_col(from.row(), to.col()), None);
                }
                if to.row() == piece.color.promotion_row() {
                    next.set_piece(to, Some(Piece::new(piece.color, PieceKind::Queen)));
                }
            }
            PieceKind::King => {
                if let Some(side) = CastleSide::of_king_jump(from, to) {
                    let rook_from = side.rook_from(piece.color);
                    let rook = next.piece_at(rook_from);
                    let rook_to = side.rook_to(piece.color);
                    next.set_piece(rook_from, None);
                    next.set_piece(rook_to, rook);
                    next.castling = next.castling.after_move(rook_from, rook_to);
                }
            }
            _ => {}
        }

        next.en_passant = match piece.kind {
            PieceKind::Pawn if from.row().abs_diff(to.row()) == 2 => {
                Some(Square::from_row_col((from.row() + to.row()) / 2, from.col()))
            }
            _ => None,
        };
        next.side_to_move = self.side_to_move.other();
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

/// A plain-text diagram, rank 8 at the top, `.` for empty squares.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let c = self
                    .piece_at(Square::from_row_col(row, col))
                    .map_or('.', Piece::to_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn apply_returns_a_new_position_and_keeps_the_old_one() {
        let start = Position::starting();
        let next = start.apply(sq("e2"), sq("e4"));

        assert_eq!(start, Position::starting());
        assert_eq!(next.piece_at(sq("e2")), None);
        assert_eq!(next.piece_at(sq("e4")), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(next.en_passant(), Some(sq("e3")));
        assert_eq!(next.side_to_move(), Color::Black);
    }

    #[test]
    fn single_step_clears_the_en_passant_target() {
        let pos = Position::starting()
            .apply(sq("e2"), sq("e4"))
            .apply(sq("e7"), sq("e6"));
        assert_eq!(pos.en_passant(), None);
    }

    #[test]
    fn applying_from_an_empty_square_changes_nothing() {
        let start = Position::starting();
        assert_eq!(start.apply(sq("e4"), sq("e5")), start);
    }

    #[test]
    fn king_lookup_finds_both_kings() {
        let start = Position::starting();
        assert_eq!(start.king_square(Color::White), Some(sq("e1")));
        assert_eq!(start.king_square(Color::Black), Some(sq("e8")));
    }
}
