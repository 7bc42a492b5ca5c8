use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::square::Square;

/// Back-row piece order from file a to file h.
pub const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The standard starting arrangement, indexed by `Square::index`.
pub fn starting_squares() -> [Option<Piece>; Square::COUNT] {
    let mut squares = [None; Square::COUNT];
    for color in [Color::White, Color::Black] {
        for (col, &kind) in BACK_ROW.iter().enumerate() {
            let back = Square::from_row_col(color.back_row(), col as u8);
            let pawn = Square::from_row_col(color.pawn_row(), col as u8);
            squares[back.index()] = Some(Piece::new(color, kind));
            squares[pawn.index()] = Some(Piece::new(color, PieceKind::Pawn));
        }
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_has_sixteen_pieces_per_side() {
        let squares = starting_squares();
        let white = squares.iter().flatten().filter(|p| p.color == Color::White).count();
        let black = squares.iter().flatten().filter(|p| p.color == Color::Black).count();
        assert_eq!((white, black), (16, 16));
        assert_eq!(squares[4], Some(Piece::new(Color::Black, PieceKind::King)));
        assert_eq!(squares[60], Some(Piece::new(Color::White, PieceKind::King)));
    }
}
