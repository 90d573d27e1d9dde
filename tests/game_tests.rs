use rookery::bitboard::BitboardExt;
use rookery::board::{Board, Color, Piece, PromotedPiece};
use rookery::game::ChessGame;
use rookery::search::Negamax;
use rookery::square::Square;
use std::str::FromStr;

#[test]
fn pawn_destinations_from_the_start() {
    let game = ChessGame::new(Color::White);
    let dests = game.legal_destinations(Square::E2);
    assert!(dests.is_set(Square::E3));
    assert!(dests.is_set(Square::E4));
    assert_eq!(dests.count_ones(), 2);
}

#[test]
fn empty_square_has_no_destinations() {
    let game = ChessGame::new(Color::White);
    assert_eq!(game.legal_destinations(Square::E4), 0);
}

#[test]
fn accepted_move_swaps_the_side() {
    let mut game = ChessGame::new(Color::White);
    let mv = game.make_move(Square::E2, Square::E4, None).expect("e2e4 is legal");
    assert!(mv.is_double_pawn_push());
    assert_eq!(game.board().side_to_move, Color::Black);
    assert_eq!(game.board().en_passant_target(), Some(Square::E3));
}

#[test]
fn illegal_request_is_rejected_and_harmless() {
    let mut game = ChessGame::new(Color::White);
    let before = *game.board();
    assert!(game.make_move(Square::E2, Square::E5, None).is_err());
    assert!(game.make_move(Square::E7, Square::E5, None).is_err(), "wrong side");
    assert!(game.make_move(Square::E4, Square::E5, None).is_err(), "empty source");
    assert_eq!(*game.board(), before);
}

#[test]
fn undo_then_replay_reaches_the_same_hash() {
    let mut game = ChessGame::new(Color::White);
    let start_hash = game.board().zobrist;

    let mv = game.make_move(Square::G1, Square::F3, None).unwrap();
    let after_hash = game.board().zobrist;

    assert!(game.undo());
    assert_eq!(game.board().zobrist, start_hash);

    game.make_move(mv.from, mv.to, None).unwrap();
    assert_eq!(game.board().zobrist, after_hash);
}

#[test]
fn undo_on_a_fresh_game_fails() {
    let mut game = ChessGame::new(Color::White);
    assert!(!game.undo());
}

#[test]
fn undo_unwinds_moves_in_order() {
    let mut game = ChessGame::new(Color::White);
    let h0 = game.board().zobrist;
    game.make_move(Square::E2, Square::E4, None).unwrap();
    let h1 = game.board().zobrist;
    game.make_move(Square::E7, Square::E5, None).unwrap();

    assert!(game.undo());
    assert_eq!(game.board().zobrist, h1);
    assert!(game.undo());
    assert_eq!(game.board().zobrist, h0);
    assert!(!game.undo());
}

#[test]
fn promotion_honors_the_chosen_piece() {
    let board = Board::from_str("8/P6k/8/8/8/8/7K/8 w - - 0 1").unwrap();
    let mut game = ChessGame::with_searcher(board, Color::White, Negamax::new(2));
    let mv = game
        .make_move(Square::A7, Square::A8, Some(PromotedPiece::Rook))
        .expect("promotion is legal");
    assert!(mv.is_promotion());
    assert_eq!(game.piece_at(Square::A8), Some((Color::White, Piece::Rook)));
}

#[test]
fn promotion_defaults_to_a_knight() {
    let board = Board::from_str("8/P6k/8/8/8/8/7K/8 w - - 0 1").unwrap();
    let mut game = ChessGame::with_searcher(board, Color::White, Negamax::new(2));
    game.make_move(Square::A7, Square::A8, None).expect("promotion is legal");
    assert_eq!(game.piece_at(Square::A8), Some((Color::White, Piece::Knight)));
}

#[test]
fn engine_refuses_to_move_for_the_human() {
    let mut game = ChessGame::new(Color::White);
    assert!(game.make_engine_move().is_err(), "white is the human here");
}

#[test]
fn engine_plays_when_it_is_its_turn() {
    let board = Board::from_str("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
    // Human plays black, so the engine owns the white pieces.
    let mut game = ChessGame::with_searcher(board, Color::Black, Negamax::new(2));
    let mv = game
        .make_engine_move()
        .expect("engine's turn")
        .expect("position is not terminal");
    assert_eq!((mv.from, mv.to), (Square::E4, Square::D5));
    assert_eq!(game.board().side_to_move, Color::Black);
}

#[test]
fn engine_signals_game_over_on_terminal_positions() {
    let board = Board::from_str("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let mut game = ChessGame::with_searcher(board, Color::White, Negamax::new(2));
    assert_eq!(game.make_engine_move().expect("engine's turn"), None);
}

#[test]
fn piece_at_mirrors_the_board() {
    let game = ChessGame::new(Color::White);
    assert_eq!(game.piece_at(Square::D1), Some((Color::White, Piece::Queen)));
    assert_eq!(game.piece_at(Square::D4), None);
    assert_eq!(game.human_color(), Color::White);
}
