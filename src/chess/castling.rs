use crate::chess::piece::Color;
use crate::core::square::Square;

pub const KING_COL: u8 = 4;

/// Where `color`'s king stands before it has moved.
pub fn king_start(color: Color) -> Square {
    Square::from_row_col(color.back_row(), KING_COL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    #[inline]
    pub fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    #[inline]
    pub fn king_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    #[inline]
    pub fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Which side a king move of two files from `from` to `to` castles to.
    pub fn of_king_jump(from: Square, to: Square) -> Option<CastleSide> {
        if from.row() != to.row() {
            return None;
        }
        match to.col() as i8 - from.col() as i8 {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    pub fn king_to(self, color: Color) -> Square {
        Square::from_row_col(color.back_row(), self.king_to_col())
    }

    pub fn rook_from(self, color: Color) -> Square {
        Square::from_row_col(color.back_row(), self.rook_col())
    }

    pub fn rook_to(self, color: Color) -> Square {
        Square::from_row_col(color.back_row(), self.rook_to_col())
    }
}

/// "Has it moved" flags for both kings and the four corner rooks.
///
/// Flags only ever go from `false` to `true`. A right is available while neither
/// the king nor that side's rook has moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_moved: bool,
    pub black_king_moved: bool,
    pub white_kingside_rook_moved: bool,
    pub white_queenside_rook_moved: bool,
    pub black_kingside_rook_moved: bool,
    pub black_queenside_rook_moved: bool,
}

impl CastlingRights {
    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_kingside_rook_moved,
            (Color::White, CastleSide::QueenSide) => self.white_queenside_rook_moved,
            (Color::Black, CastleSide::KingSide) => self.black_kingside_rook_moved,
            (Color::Black, CastleSide::QueenSide) => self.black_queenside_rook_moved,
        }
    }

    pub fn available(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    pub(crate) fn mark_king(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
    }

    pub(crate) fn mark_rook(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_kingside_rook_moved = true,
            (Color::White, CastleSide::QueenSide) => self.white_queenside_rook_moved = true,
            (Color::Black, CastleSide::KingSide) => self.black_kingside_rook_moved = true,
            (Color::Black, CastleSide::QueenSide) => self.black_queenside_rook_moved = true,
        }
    }

    /// Rights after a move from `from` to `to`.
    ///
    /// Leaving a king or corner-rook start square sets its flag. Landing on a
    /// corner also sets it: the rook there has been captured.
    pub fn after_move(self, from: Square, to: Square) -> CastlingRights {
        let mut next = self;
        for color in [Color::White, Color::Black] {
            if from == king_start(color) {
                next.mark_king(color);
            }
            for side in CastleSide::BOTH {
                let corner = side.rook_from(color);
                if from == corner || to == corner {
                    next.mark_rook(color, side);
                }
            }
        }
        next
    }
}
