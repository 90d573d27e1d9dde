//! Static evaluation: material plus piece-square bonuses, always from
//! White's point of view. The search negates for the side to move.

use crate::board::{Board, Color, Piece};
use crate::utils::pop_lsb;

pub const MIN_SCORE: i32 = -10_000_000;
pub const MAX_SCORE: i32 = 10_000_000;
/// Returned from the mated side's point of view.
pub const MATING_SCORE: i32 = -9_999_999;

/// Centipawn-like material weights, indexed by `Piece`.
const PIECE_VALUES: [i32; 6] = [100, 300, 350, 500, 1000, 10_000];

// Piece-square tables indexed from White's perspective (a1 = 0); black
// pieces read them through the vertical mirror.
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,  0,  0,   0,   0,  0,  0,  0,
     0,  0,  0, -10, -10,  0,  0,  0,
     0,  0,  0,   5,   5,  0,  0,  0,
     5,  5, 10,  20,  20,  5,  5,  5,
    10, 10, 10,  20,  20, 10, 10, 10,
    20, 20, 20,  30,  30, 30, 20, 20,
    30, 30, 30,  40,  40, 30, 30, 30,
    90, 90, 90,  90,  90, 90, 90, 90,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -5, -10,  0,  0,  0,  0, -10, -5,
    -5,   0,  0,  0,  0,  0,   0, -5,
    -5,   5, 20, 10, 10, 20,   5, -5,
    -5,  10, 20, 30, 30, 20,  10, -5,
    -5,  10, 20, 30, 30, 20,  10, -5,
    -5,   5, 20, 20, 20, 20,   5, -5,
    -5,   0,  0, 10, 10,  0,   0, -5,
    -5,   0,  0,  0,  0,  0,   0, -5,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    0,  0, -10,  0,  0, -10,  0, 0,
    0, 30,   0,  0,  0,   0, 30, 0,
    0, 10,   0,  0,  0,   0, 10, 0,
    0,  0,  10, 20, 20,  10,  0, 0,
    0,  0,  10, 20, 20,  10,  0, 0,
    0,  0,   0, 10, 10,   0,  0, 0,
    0,  0,   0,  0,  0,   0,  0, 0,
    0,  0,   0,  0,  0,   0,  0, 0,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
     0,  0,  0, 20, 20,  0,  0,  0,
     0,  0, 10, 20, 20, 10,  0,  0,
     0,  0, 10, 20, 20, 10,  0,  0,
     0,  0, 10, 20, 20, 10,  0,  0,
     0,  0, 10, 20, 20, 10,  0,  0,
     0,  0, 10, 20, 20, 10,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    50, 50, 50, 50, 50, 50, 50, 50,
];

#[rustfmt::skip]
const KING_PST: [i32; 64] = [
    0, 0,  5,  0, -15,  0, 10, 0,
    0, 5,  5, -5,  -5,  0,  5, 0,
    0, 0,  5, 10,  10,  5,  0, 0,
    0, 5, 10, 20,  20, 10,  5, 0,
    0, 5, 10, 20,  20, 10,  5, 0,
    0, 5,  5, 10,  10,  5,  5, 0,
    0, 0,  5,  5,   5,  5,  0, 0,
    0, 0,  0,  0,   0,  0,  0, 0,
];

/// Positional bonus for `piece` standing on `sq` (White's orientation).
/// The queen carries material weight only.
#[inline(always)]
fn pst_bonus(piece: Piece, sq: usize) -> i32 {
    match piece {
        Piece::Pawn => PAWN_PST[sq],
        Piece::Knight => KNIGHT_PST[sq],
        Piece::Bishop => BISHOP_PST[sq],
        Piece::Rook => ROOK_PST[sq],
        Piece::Queen => 0,
        Piece::King => KING_PST[sq],
    }
}

#[inline(always)]
pub fn piece_value(piece: Piece) -> i32 {
    PIECE_VALUES[piece as usize]
}

/// Material + piece-square score from White's perspective. Black pieces
/// contribute with opposite sign, reading the tables through the vertical
/// mirror (a black pawn on d7 scores like a white pawn on d2).
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    for piece in Piece::ALL {
        let value = piece_value(piece);

        let mut white = board.pieces(piece, Color::White);
        while white != 0 {
            let sq = pop_lsb(&mut white) as usize;
            score += value + pst_bonus(piece, sq);
        }

        let mut black = board.pieces(piece, Color::Black);
        while black != 0 {
            let sq = pop_lsb(&mut black) as usize;
            score -= value + pst_bonus(piece, sq ^ 56);
        }
    }

    score
}

/// Evaluation from the point of view of the side to move, as negamax wants.
#[inline(always)]
pub fn evaluate_relative(board: &Board) -> i32 {
    match board.side_to_move {
        Color::White => evaluate(board),
        Color::Black => -evaluate(board),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn extra_material_shifts_the_score() {
        // White is up a rook.
        let b = Board::from_str("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let score = evaluate(&b);
        assert!(score >= 500, "rook-up position scored {score}");
    }

    #[test]
    fn mirrored_positions_negate() {
        // The same structure with colors swapped and ranks flipped.
        let white_up = Board::from_str("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let black_up = Board::from_str("4k3/4p3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(evaluate(&white_up), -evaluate(&black_up));
    }

    #[test]
    fn relative_eval_negates_for_black() {
        let mut b = Board::from_str("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let white_view = evaluate_relative(&b);
        b.side_to_move = Color::Black;
        b.refresh_zobrist();
        assert_eq!(evaluate_relative(&b), -white_view);
    }

    #[test]
    fn advanced_pawn_outranks_home_pawn() {
        let home = Board::from_str("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let advanced = Board::from_str("4k3/8/4P3/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(evaluate(&advanced) > evaluate(&home));
    }
}
