use crate::board::Board;
use crate::moves::AttackTables;
use crate::moves::execute::generate_legal;
use crate::moves::square_control::in_check;
use crate::moves::types::Move;
use arrayvec::ArrayVec;

/// Terminal classification for a position. Draw rules that need clocks or
/// repetition tracking are outside this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InPlay,
    Stalemate,
    Checkmate,
}

pub fn position_status(board: &Board, tables: &AttackTables) -> GameStatus {
    let mut legal: ArrayVec<Move, 256> = ArrayVec::new();
    generate_legal(board, tables, &mut legal);

    if legal.is_empty() {
        if in_check(board, board.side_to_move, tables) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    } else {
        GameStatus::InPlay
    }
}
