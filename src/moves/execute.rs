//! Move application. `make_move` never mutates its input: it applies the
//! move to a private copy and returns that copy, so callers keep the old
//! position for history and for tentative search probes.

use crate::bitboard::BitboardExt;
use crate::board::castle_bits::*;
use crate::board::{Board, Color, Piece, PromotedPiece};
use crate::moves::AttackTables;
use crate::moves::movegen::{generate_pseudo_legal, kingside_between, queenside_between};
use crate::moves::square_control::{in_check, is_legal_castling};
use crate::moves::types::{
    CAPTURE, DOUBLE_PAWN_PUSH, EN_PASSANT, KINGSIDE_CASTLE, Move, MoveBuffer, PROMOTION,
    QUEENSIDE_CASTLE, QUIET_MOVE,
};
use crate::square::Square;
use arrayvec::ArrayVec;

/// Rook relocation by king destination index.
#[inline(always)]
fn rook_castle_squares(king_to_idx: u8) -> Option<(Square, Square)> {
    match king_to_idx {
        6 => Some((Square::H1, Square::F1)),  // White O-O
        2 => Some((Square::A1, Square::D1)),  // White O-O-O
        62 => Some((Square::H8, Square::F8)), // Black O-O
        58 => Some((Square::A8, Square::D8)), // Black O-O-O
        _ => None,
    }
}

/// The castling right lost when a rook of `color` leaves (or is captured on)
/// square `rook_sq`.
#[inline(always)]
fn rights_mask_to_clear_for_rook(color: Color, rook_sq: u8) -> CastleBits {
    match (color, rook_sq) {
        (Color::White, 0) => CASTLE_WQ,  // a1
        (Color::White, 7) => CASTLE_WK,  // h1
        (Color::Black, 56) => CASTLE_BQ, // a8
        (Color::Black, 63) => CASTLE_BK, // h8
        _ => 0,
    }
}

#[inline(always)]
fn remove_piece(board: &mut Board, color: Color, piece: Piece, sq: Square) {
    let new_bb = board.bb(color, piece).clear_sq(sq);
    board.set_bb(color, piece, new_bb);
}

#[inline(always)]
fn place_piece(board: &mut Board, color: Color, piece: Piece, sq: Square) {
    let new_bb = board.bb(color, piece).set_sq(sq);
    board.set_bb(color, piece, new_bb);
}

/// Applies `mv` and returns the resulting position.
///
/// Rule violations (empty source, wrong color, bad capture target, castle
/// without its preconditions) are reported as `Err` and the caller's board
/// is untouched. Leaving one's own king attacked is *not* checked here; that
/// is the legality filter's job.
pub fn make_move(board: &Board, mv: Move, tables: &AttackTables) -> Result<Board, String> {
    let mut next = *board;
    let color = next.side_to_move;

    let Some((piece_color, piece)) = next.piece_at(mv.from) else {
        return Err(format!("no piece on {}", mv.from));
    };
    if piece_color != color {
        return Err(format!("piece on {} belongs to the opponent", mv.from));
    }

    let castle_rook = if mv.is_castling() {
        let right = if mv.is_kingside_castle() {
            match color {
                Color::White => CASTLE_WK,
                Color::Black => CASTLE_BK,
            }
        } else {
            match color {
                Color::White => CASTLE_WQ,
                Color::Black => CASTLE_BQ,
            }
        };
        if !next.has_castling(right) {
            return Err("castling right already lost".to_string());
        }
        let between = if mv.is_kingside_castle() {
            kingside_between(color)
        } else {
            queenside_between(color)
        };
        if next.occupied() & between != 0 {
            return Err("castling path is blocked".to_string());
        }
        if !is_legal_castling(&next, mv, tables) {
            return Err("castling out of or through check".to_string());
        }
        let Some(rook_move) = rook_castle_squares(mv.to.index()) else {
            return Err("malformed castling move".to_string());
        };
        if piece != Piece::King {
            return Err("castling move must be made by the king".to_string());
        }
        Some(rook_move)
    } else {
        None
    };

    // 1) Remove the captured piece. En passant takes the pawn behind the
    //    destination; everything else takes whatever sits on the target.
    let mut captured: Option<(Color, Piece, Square)> = None;
    if mv.is_en_passant() {
        if next.piece_at(mv.to).is_some() {
            return Err(format!("en-passant target {} is occupied", mv.to));
        }
        let cap_sq = match color {
            Color::White => Square::from_index(mv.to.index() - 8),
            Color::Black => Square::from_index(mv.to.index() + 8),
        };
        if next.bb(color.opposite(), Piece::Pawn).is_set(cap_sq) {
            captured = Some((color.opposite(), Piece::Pawn, cap_sq));
            remove_piece(&mut next, color.opposite(), Piece::Pawn, cap_sq);
        } else {
            return Err(format!("no pawn to capture en passant on {cap_sq}"));
        }
    } else if let Some((occ_color, occ_piece)) = next.piece_at(mv.to) {
        if occ_color == color {
            return Err(format!("cannot capture own piece on {}", mv.to));
        }
        captured = Some((occ_color, occ_piece, mv.to));
        remove_piece(&mut next, occ_color, occ_piece, mv.to);
    } else if mv.is_capture() {
        return Err(format!("capture flag set but {} is empty", mv.to));
    }

    // 2) Move the moving piece. Promotions swap the pawn for the chosen
    //    piece; castles relocate the rook as well.
    remove_piece(&mut next, color, piece, mv.from);
    if mv.is_promotion() {
        if piece != Piece::Pawn {
            return Err("only pawns promote".to_string());
        }
        let promo = mv.promotion.unwrap_or(PromotedPiece::Knight);
        place_piece(&mut next, color, promo.piece(), mv.to);
    } else {
        place_piece(&mut next, color, piece, mv.to);
    }
    if let Some((rook_from, rook_to)) = castle_rook {
        remove_piece(&mut next, color, Piece::Rook, rook_from);
        place_piece(&mut next, color, Piece::Rook, rook_to);
    }

    // 3) Castling rights: a king move drops both of its rights, a rook move
    //    from a corner drops one, and capturing a rook on its home corner
    //    drops the victim's.
    let mut mask_to_clear: CastleBits = 0;
    if piece == Piece::King {
        mask_to_clear |= match color {
            Color::White => CASTLE_WK | CASTLE_WQ,
            Color::Black => CASTLE_BK | CASTLE_BQ,
        };
    }
    if piece == Piece::Rook {
        mask_to_clear |= rights_mask_to_clear_for_rook(color, mv.from.index());
    }
    if let Some((cap_color, cap_piece, cap_sq)) = captured
        && cap_piece == Piece::Rook
    {
        mask_to_clear |= rights_mask_to_clear_for_rook(cap_color, cap_sq.index());
    }
    next.set_castling_rights(next.castling_rights & !mask_to_clear);

    // 4) En-passant target: set on a double push, cleared otherwise.
    if mv.is_double_pawn_push() && piece == Piece::Pawn {
        let skipped = match color {
            Color::White => Square::from_index(mv.to.index() - 8),
            Color::Black => Square::from_index(mv.to.index() + 8),
        };
        next.set_en_passant(Some(skipped));
    } else {
        next.set_en_passant(None);
    }

    // 5) Clocks. The halfmove clock resets on pawn moves and captures.
    if captured.is_some() || piece == Piece::Pawn {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock += 1;
    }
    if color == Color::Black {
        next.fullmove_number += 1;
    }

    // 6) Hand the move to the opponent.
    next.flip_side();

    #[cfg(debug_assertions)]
    next.assert_hash();

    Ok(next)
}

/// Infers the move flags for a (from, to, promotion) request by inspecting
/// the moving piece and the geometry, per the same conventions the generator
/// uses. `promotion` defaults to a knight when the caller supplies none.
pub fn infer_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PromotedPiece>,
) -> Result<Move, String> {
    let Some((color, piece)) = board.piece_at(from) else {
        return Err(format!("no piece on {from}"));
    };

    let mut flags = QUIET_MOVE;
    let mut promo = None;

    let is_enemy_target = board
        .color_at(to)
        .is_some_and(|target| target == color.opposite());

    if piece == Piece::Pawn && board.en_passant == Some(to) {
        flags = EN_PASSANT;
    } else if is_enemy_target {
        flags = CAPTURE;
    }

    if piece == Piece::Pawn {
        let from_rank = from.rank();
        let to_rank = to.rank();
        let double = match color {
            Color::White => from_rank == 1 && to_rank == 3,
            Color::Black => from_rank == 6 && to_rank == 4,
        };
        if double {
            flags = DOUBLE_PAWN_PUSH;
        }
        let last_rank = match color {
            Color::White => 7,
            Color::Black => 0,
        };
        if to_rank == last_rank {
            flags |= PROMOTION;
            promo = Some(promotion.unwrap_or(PromotedPiece::Knight));
        }
    }

    if piece == Piece::King {
        match (color, from, to) {
            (Color::White, Square::E1, Square::G1) | (Color::Black, Square::E8, Square::G8) => {
                flags = KINGSIDE_CASTLE;
            }
            (Color::White, Square::E1, Square::C1) | (Color::Black, Square::E8, Square::C8) => {
                flags = QUEENSIDE_CASTLE;
            }
            _ => {}
        }
    }

    Ok(Move {
        from,
        to,
        promotion: promo,
        flags,
    })
}

/// All legal moves for the side to move: every pseudo-legal move whose
/// resulting position does not leave the mover's king attacked.
pub fn generate_legal(board: &Board, tables: &AttackTables, moves: &mut impl MoveBuffer) {
    let mut pseudo: ArrayVec<Move, 256> = ArrayVec::new();
    generate_pseudo_legal(board, tables, &mut pseudo);

    moves.clear();
    let mover = board.side_to_move;
    for mv in pseudo {
        let Ok(next) = make_move(board, mv, tables) else {
            continue;
        };
        if !in_check(&next, mover, tables) {
            moves.push(mv);
        }
    }
}

/// Bit-set of legal destination squares for the piece on `from`; empty when
/// the square is empty, hosts an opposing piece, or has no legal moves.
pub fn legal_destinations(board: &Board, from: Square, tables: &AttackTables) -> u64 {
    let mut moves: ArrayVec<Move, 256> = ArrayVec::new();
    generate_legal(board, tables, &mut moves);

    let mut targets = 0u64;
    for mv in moves.iter().filter(|mv| mv.from == from) {
        targets = targets.set_sq(mv.to);
    }
    targets
}
