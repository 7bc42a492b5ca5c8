//! Standard chess vocabulary: pieces, castling rights, the starting layout and FEN.

pub mod castling;
pub mod fen;
pub mod layout;
pub mod piece;
