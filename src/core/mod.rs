//! Board geometry and the position snapshot.
//!
//! - [`coord`]: column/row steps and the king step set.
//! - [`square`]: the 64 squares and their algebraic names.
//! - [`square_set`]: a bitset of squares, the result type of legal-move queries.
//! - [`position`]: one complete, copyable board state.

pub mod coord;
pub mod position;
pub mod square;
pub mod square_set;
