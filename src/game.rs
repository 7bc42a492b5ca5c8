use crate::chess::fen::{parse_fen, to_fen};
use crate::chess::piece::{Color, Piece};
use crate::core::position::Position;
use crate::core::square::Square;
use crate::core::square_set::SquareSet;
use crate::error::ChessError;
use crate::rules::attacks;
use crate::rules::checkmate::{self, GameStatus};
use crate::rules::movegen::{legal_destinations, Move};

/// One game in progress: the current position plus the moves that led to it.
///
/// All mutation goes through [`Game::make_move`] (and its text wrappers) or
/// [`Game::reset`]. Queries never change the game, even transiently.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    history: Vec<Move>,
    /// Plies already played before `history` starts (0 from the standard start).
    start_ply: usize,
}

impl Game {
    pub fn new() -> Self {
        Self {
            position: Position::starting(),
            history: Vec::new(),
            start_ply: 0,
        }
    }

    /// Start a game from an arbitrary FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let (position, fullmove) = parse_fen(fen)?;
        let start_ply = (fullmove - 1) * 2 + usize::from(position.side_to_move() == Color::Black);
        tracing::debug!(fen, "loaded position");
        Ok(Self {
            position,
            history: Vec::new(),
            start_ply,
        })
    }

    /// Back to the standard starting position with an empty history.
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!("game reset");
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Legal destinations for the piece on `from`.
    ///
    /// Empty for an empty square or a piece of the side not to move.
    pub fn legal_moves(&self, from: Square) -> SquareSet {
        match self.position.piece_at(from) {
            Some(p) if p.color == self.side_to_move() => legal_destinations(&self.position, from),
            _ => SquareSet::EMPTY,
        }
    }

    /// [`Game::legal_moves`] for an algebraic square such as `"e2"`.
    pub fn legal_moves_at(&self, from: &str) -> Result<SquareSet, ChessError> {
        Ok(self.legal_moves(from.parse()?))
    }

    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        attacks::is_square_attacked(&self.position, sq, by)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        checkmate::is_in_check(&self.position, color)
    }

    pub fn has_moves(&self, color: Color) -> bool {
        checkmate::has_moves(&self.position, color)
    }

    /// Check / checkmate / stalemate for the side to move.
    pub fn status(&self) -> GameStatus {
        checkmate::status(&self.position)
    }

    /// Play `from` -> `to` if it is legal for the side to move.
    ///
    /// Returns `false` and changes nothing otherwise. Game-over positions are
    /// not refused here; use [`Game::status`] to detect them.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        if !self.legal_moves(from).contains(to) {
            tracing::trace!(%from, %to, "rejected illegal move");
            return false;
        }
        self.position = self.position.apply(from, to);
        self.history.push(Move::new(from, to));
        tracing::debug!(%from, %to, ply = self.start_ply + self.history.len(), "move played");
        true
    }

    /// Coordinate form of [`Game::make_move`]: `play("e2", "e4")`.
    ///
    /// Malformed squares are rejected before the board is looked at.
    pub fn play(&mut self, from: &str, to: &str) -> Result<(), ChessError> {
        let from_sq: Square = from.parse()?;
        let to_sq: Square = to.parse()?;
        if self.make_move(from_sq, to_sq) {
            Ok(())
        } else {
            Err(ChessError::IllegalMove {
                from: from.to_string(),
                to: to.to_string(),
            })
        }
    }

    /// Play a move in engine notation (`e2e4`, `e7e8q`).
    pub fn play_uci(&mut self, text: &str) -> Result<Move, ChessError> {
        let mv: Move = text.parse()?;
        if self.make_move(mv.from, mv.to) {
            Ok(mv)
        } else {
            Err(ChessError::IllegalMove {
                from: mv.from.to_string(),
                to: mv.to.to_string(),
            })
        }
    }

    pub fn fullmove_number(&self) -> usize {
        (self.start_ply + self.history.len()) / 2 + 1
    }

    /// The current position in FEN, ready for an external engine.
    pub fn to_fen(&self) -> String {
        to_fen(&self.position, self.fullmove_number())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
