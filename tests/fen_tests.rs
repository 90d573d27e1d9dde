use rookery::board::{Board, CASTLE_ALL, CASTLE_BK, CASTLE_WK, Color, Piece};
use rookery::square::Square;
use std::str::FromStr;

#[test]
fn parses_the_standard_start() {
    let b = Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(b, Board::new());
}

#[test]
fn parses_all_six_fields() {
    let b = Board::from_str("4k3/8/8/8/4P3/8/8/4K3 b Kk e3 12 34").unwrap();
    assert_eq!(b.side_to_move, Color::Black);
    assert_eq!(b.castling_rights, CASTLE_WK | CASTLE_BK);
    assert_eq!(b.en_passant_target(), Some(Square::E3));
    assert_eq!(b.halfmove_clock, 12);
    assert_eq!(b.fullmove_number, 34);
    assert_eq!(b.piece_at(Square::E4), Some((Color::White, Piece::Pawn)));
}

#[test]
fn missing_trailing_fields_use_defaults() {
    let b = Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap();
    assert_eq!(b.side_to_move, Color::White);
    assert_eq!(b.castling_rights, CASTLE_ALL);
    assert_eq!(b.en_passant_target(), None);
    assert_eq!(b.halfmove_clock, 0);
    assert_eq!(b.fullmove_number, 1);
}

#[test]
fn dash_castling_field_clears_all_rights() {
    let b = Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
    assert_eq!(b.castling_rights, 0);
}

#[test]
fn rejects_unknown_piece_letters() {
    assert!(Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1").is_err());
}

#[test]
fn rejects_malformed_placement() {
    // seven ranks
    assert!(Board::from_str("8/8/8/8/8/8/PPPPPPPP w - - 0 1").is_err());
    // rank wider than the board
    assert!(Board::from_str("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").is_err());
    // rank too short
    assert!(Board::from_str("rnbqkbn/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").is_err());
    // zero-length empty run
    assert!(Board::from_str("rnbqkbnr/pppppppp/80/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").is_err());
}

#[test]
fn rejects_bad_side_castling_and_clock_fields() {
    assert!(Board::from_str("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
    assert!(Board::from_str("4k3/8/8/8/8/8/8/4K3 w KX - 0 1").is_err());
    assert!(Board::from_str("4k3/8/8/8/8/8/8/4K3 w - - abc 1").is_err());
    assert!(Board::from_str("4k3/8/8/8/8/8/8/4K3 w - - 0 xyz").is_err());
}

#[test]
fn rejects_bad_en_passant_squares() {
    assert!(Board::from_str("4k3/8/8/8/8/8/8/4K3 w - e9 0 1").is_err());
    assert!(Board::from_str("4k3/8/8/8/8/8/8/4K3 w - ee 0 1").is_err());
    // legal square, impossible rank for an en-passant target
    assert!(Board::from_str("4k3/8/8/8/8/8/8/4K3 w - e4 0 1").is_err());
}

#[test]
fn rejects_positions_without_exactly_one_king_each() {
    assert!(Board::from_str("8/8/8/8/8/8/8/4K3 w - - 0 1").is_err(), "no black king");
    assert!(
        Board::from_str("4k3/8/8/8/8/8/8/2K1K3 w - - 0 1").is_err(),
        "two white kings"
    );
}

#[test]
fn failed_parse_leaves_the_board_untouched() {
    let mut b = Board::new();
    let before = b;
    assert!(b.set_fen("garbage").is_err());
    assert_eq!(b, before);
}
