//! Rules engine for standard chess: legal move generation, move application,
//! check / checkmate / stalemate detection and FEN export for an external engine.

pub mod chess;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod uci;

pub use crate::chess::piece::{Color, Piece, PieceKind};
pub use crate::core::square::Square;
pub use crate::error::ChessError;
pub use crate::game::Game;
pub use crate::rules::checkmate::GameStatus;
pub use crate::rules::movegen::Move;
