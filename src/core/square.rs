use std::fmt;
use std::str::FromStr;

use crate::core::coord::Coord;
use crate::error::ChessError;

/// One of the 64 board squares.
///
/// Indexed row-major from the top: index 0 is a8, index 7 is h8, index 63 is h1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    pub fn new(index: usize) -> Option<Square> {
        (index < Self::COUNT).then(|| Square(index as u8))
    }

    /// `row` 0 is rank 8, `col` 0 is file a. Both must be in `0..8`.
    pub const fn from_row_col(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    pub fn from_coord(c: Coord) -> Option<Square> {
        c.on_board()
            .then(|| Square::from_row_col(c.y as u8, c.x as u8))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    pub fn coord(self) -> Coord {
        Coord::new(self.col() as i8, self.row() as i8)
    }

    /// The square `delta` away, if it is still on the board.
    pub fn offset(self, delta: Coord) -> Option<Square> {
        Square::from_coord(self.coord() + delta)
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.row()) as char
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessError::InvalidSquare(s.to_string());
        let &[file, rank] = s.as_bytes() else {
            return Err(invalid());
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square::from_row_col(b'8' - rank, file - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_follow_top_down_layout() {
        assert_eq!("a8".parse::<Square>().unwrap().index(), 0);
        assert_eq!("h8".parse::<Square>().unwrap().index(), 7);
        assert_eq!("a1".parse::<Square>().unwrap().index(), 56);
        assert_eq!("h1".parse::<Square>().unwrap().index(), 63);
        assert_eq!(Square::from_row_col(6, 4).to_string(), "e2");
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for bad in ["", "e", "i1", "a0", "a9", "e22", "E2", "2e"] {
            assert!(bad.parse::<Square>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn offset_stops_at_the_edge() {
        let h1: Square = "h1".parse().unwrap();
        assert_eq!(h1.offset(Coord::new(1, 0)), None);
        assert_eq!(h1.offset(Coord::new(-1, -1)).map(|s| s.to_string()).as_deref(), Some("g2"));
    }
}
