//! The game façade consumed by a front-end: one current position, a history
//! stack of whole boards for undo, and the engine that answers for the
//! non-human side.

use crate::board::{Board, Color, Piece, PromotedPiece};
use crate::moves::execute::{infer_move, legal_destinations, make_move};
use crate::moves::{AttackTables, attack_tables};
use crate::moves::types::Move;
use crate::search::Negamax;
use crate::square::Square;
use tracing::debug;

pub struct ChessGame {
    board: Board,
    /// Boards as they were before each accepted move, newest on top.
    history: Vec<Board>,
    searcher: Negamax,
    human_color: Color,
    tables: &'static AttackTables,
}

impl ChessGame {
    /// A fresh game from the standard starting position.
    pub fn new(human_color: Color) -> Self {
        ChessGame::with_searcher(Board::new(), human_color, Negamax::default())
    }

    /// A game starting from an arbitrary FEN position.
    pub fn from_fen(fen: &str, human_color: Color) -> Result<Self, String> {
        let board: Board = fen.parse()?;
        Ok(ChessGame::with_searcher(board, human_color, Negamax::default()))
    }

    pub fn with_searcher(board: Board, human_color: Color, searcher: Negamax) -> Self {
        ChessGame {
            board,
            history: Vec::new(),
            searcher,
            human_color,
            tables: attack_tables(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_color(&self) -> Color {
        self.human_color
    }

    /// For rendering: the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    /// Bit-set of legal target squares for the piece on `from`; empty when
    /// there is nothing there or it has no legal move.
    pub fn legal_destinations(&self, from: Square) -> u64 {
        legal_destinations(&self.board, from, self.tables)
    }

    /// Plays a (from, to, promotion) request for the side to move. The move
    /// is accepted iff `to` is among the legal destinations of `from`; the
    /// flags are inferred from the board. On success the previous position
    /// is pushed onto the history stack.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotedPiece>,
    ) -> Result<Move, String> {
        use crate::bitboard::BitboardExt;

        if !self.legal_destinations(from).is_set(to) {
            return Err(format!("{from}{to} is not a legal move"));
        }

        let mv = infer_move(&self.board, from, to, promotion)?;
        let next = make_move(&self.board, mv, self.tables)?;

        debug!(%mv, "move played");
        self.history.push(self.board);
        self.board = next;
        Ok(mv)
    }

    /// Reverts the last accepted move. Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.board = previous;
                true
            }
            None => false,
        }
    }

    /// Asks the configured searcher for the engine's move and plays it.
    ///
    /// Fails when called on the human's turn. `Ok(None)` means the engine
    /// has no legal move, i.e. the game is over (checkmate or stalemate).
    pub fn make_engine_move(&mut self) -> Result<Option<Move>, String> {
        if self.board.side_to_move == self.human_color {
            return Err("it is the human's turn to move".to_string());
        }

        let Some(mv) = self.searcher.best_move(&self.board, self.tables) else {
            return Ok(None);
        };

        let next = make_move(&self.board, mv, self.tables)?;
        debug!(%mv, "engine move played");
        self.history.push(self.board);
        self.board = next;
        Ok(Some(mv))
    }
}
