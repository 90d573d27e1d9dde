use super::fen_tables::CHAR_TO_PC;
use super::{Board, CASTLE_ALL, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, Color, Piece};
use crate::bitboard::BitboardExt;
use crate::square::Square;

impl Board {
    /// Replaces this board with the position described by `fen`.
    ///
    /// The six standard fields are accepted; trailing fields may be omitted
    /// and default to full castling rights, no en-passant target and clocks
    /// 0 / 1. Malformed input leaves `self` untouched.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let mut board = Board::new_empty();

        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.is_empty() {
            return Err("empty FEN string".to_string());
        }

        // ---- Field 1: piece placement, rank 8 first ----
        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != 8 {
            return Err(format!("expected 8 ranks, found {}", rows.len()));
        }
        for (i, row) in rows.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 || run > 8 {
                        return Err(format!("invalid empty-run digit {c:?} in rank {}", rank + 1));
                    }
                    file += run as u8;
                } else {
                    let entry = if (c as usize) < CHAR_TO_PC.len() {
                        CHAR_TO_PC[c as usize]
                    } else {
                        None
                    };
                    let Some((piece, color)) = entry else {
                        return Err(format!("unrecognized piece character {c:?}"));
                    };
                    if file >= 8 {
                        return Err(format!("rank {} overflows the board", rank + 1));
                    }
                    let sq = Square::from_file_rank(file, rank);
                    board.set_bb(color, piece, board.bb(color, piece).set_sq(sq));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(format!("rank {} describes {file} files, expected 8", rank + 1));
            }
        }

        // ---- Field 2: active color ----
        board.side_to_move = match fields.get(1) {
            None | Some(&"w") => Color::White,
            Some(&"b") => Color::Black,
            Some(other) => return Err(format!("invalid active color field: {other:?}")),
        };

        // ---- Field 3: castling rights ----
        board.castling_rights = match fields.get(2) {
            None => CASTLE_ALL,
            Some(&"-") => 0,
            Some(field) => {
                let mut rights = 0;
                for c in field.chars() {
                    rights |= match c {
                        'K' => CASTLE_WK,
                        'Q' => CASTLE_WQ,
                        'k' => CASTLE_BK,
                        'q' => CASTLE_BQ,
                        _ => return Err(format!("invalid castling character {c:?}")),
                    };
                }
                rights
            }
        };

        // ---- Field 4: en-passant target ----
        board.en_passant = match fields.get(3) {
            None | Some(&"-") => None,
            Some(field) => {
                let sq: Square = field
                    .parse()
                    .map_err(|e| format!("invalid en-passant target: {e}"))?;
                if sq.rank() != 2 && sq.rank() != 5 {
                    return Err(format!("en-passant target {sq} is not on rank 3 or 6"));
                }
                Some(sq)
            }
        };

        // ---- Fields 5 & 6: clocks ----
        board.halfmove_clock = match fields.get(4) {
            None | Some(&"-") => 0,
            Some(field) => field
                .parse()
                .map_err(|_| format!("invalid halfmove clock: {field:?}"))?,
        };
        board.fullmove_number = match fields.get(5) {
            None | Some(&"-") => 1,
            Some(field) => field
                .parse()
                .map_err(|_| format!("invalid fullmove number: {field:?}"))?,
        };

        // A position without exactly one king per side breaks every invariant
        // downstream; reject it as input rather than panic later.
        for color in [Color::White, Color::Black] {
            let kings = board.bb(color, Piece::King).count_ones();
            if kings != 1 {
                return Err(format!("{color:?} has {kings} kings"));
            }
        }

        board.refresh_zobrist();
        *self = board;
        Ok(())
    }
}
