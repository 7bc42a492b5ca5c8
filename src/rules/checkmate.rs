use crate::chess::piece::Color;
use crate::core::position::Position;

use super::attacks::is_square_attacked;
use super::movegen::legal_destinations;

/// How the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

pub fn is_in_check(pos: &Position, color: Color) -> bool {
    match pos.king_square(color) {
        Some(k) => is_square_attacked(pos, k, color.other()),
        None => false,
    }
}

/// Does `color` have at least one legal move? Stops at the first piece that does.
pub fn has_moves(pos: &Position, color: Color) -> bool {
    pos.pieces()
        .filter(|(_, p)| p.color == color)
        .any(|(sq, _)| !legal_destinations(pos, sq).is_empty())
}

pub fn status(pos: &Position) -> GameStatus {
    let color = pos.side_to_move();
    let in_check = is_in_check(pos, color);
    match (in_check, has_moves(pos, color)) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}
