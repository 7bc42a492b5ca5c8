/// Errors surfaced by the coordinate, FEN and engine-text entry points.
///
/// A rule rejection inside the engine itself is not an error: `Game::make_move`
/// reports it as `false` and leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0:?}")]
    InvalidMove(String),

    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: String, to: String },

    #[error("invalid FEN: {reason}")]
    InvalidFen { reason: String },

    #[error("unexpected engine output: {0:?}")]
    InvalidEngineReply(String),
}
