//! Text side of the UCI conversation with an external move-search engine.
//!
//! Only command formatting and reply parsing live here; spawning the engine
//! process and shuttling lines is up to the embedding application.

use crate::config::EngineConfig;
use crate::error::ChessError;
use crate::rules::movegen::Move;

/// `position fen <fen>`
pub fn position_command(fen: &str) -> String {
    format!("position fen {fen}")
}

/// `go depth N`, or `go movetime MS` when a move time is configured.
pub fn go_command(config: &EngineConfig) -> String {
    match config.move_time_ms {
        Some(ms) => format!("go movetime {ms}"),
        None => format!("go depth {}", config.depth),
    }
}

/// Parse a `bestmove` line.
///
/// Returns `Ok(None)` when the engine has no move (`bestmove (none)` or
/// `bestmove 0000`). Anything after the move (`ponder ...`) is ignored, as is a
/// promotion letter on the move itself.
pub fn parse_bestmove(line: &str) -> Result<Option<Move>, ChessError> {
    let mut parts = line.split_whitespace();
    if parts.next() != Some("bestmove") {
        return Err(ChessError::InvalidEngineReply(line.to_string()));
    }
    match parts.next() {
        None => Err(ChessError::InvalidEngineReply(line.to_string())),
        Some("(none)") | Some("0000") => Ok(None),
        Some(mv) => mv.parse().map(Some),
    }
}
