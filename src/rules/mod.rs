//! Standard chess rules over a [`Position`](crate::core::position::Position).
//!
//! - [`attacks`]: which squares a colour attacks (geometry only).
//! - [`movegen`]: pseudo-legal generation and the self-check filter.
//! - [`checkmate`]: check, checkmate and stalemate classification.

pub mod attacks;
pub mod checkmate;
pub mod movegen;
