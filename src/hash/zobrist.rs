use crate::rng::XorShiftMul;
use once_cell::sync::OnceCell;

/// Fixed seed: the keys must be identical across runs so stored hashes and
/// tests stay reproducible.
const ZOBRIST_SEED: u64 = 2_342_342;

pub struct ZobristKeys {
    /// [color][piece][square] with {White=0, Black=1} and {P,N,B,R,Q,K}={0..5}
    pub piece: [[[u64; 64]; 6]; 2],
    /// One key per en-passant target square.
    pub ep_square: [u64; 64],
    /// One key per 4-bit castling-rights pattern.
    pub castling: [u64; 16],
    /// XOR-ed in whenever Black is to move.
    pub black_to_move: u64,
}

/// Global keys, generated once on first use.
pub fn zobrist_keys() -> &'static ZobristKeys {
    static KEYS: OnceCell<ZobristKeys> = OnceCell::new();
    KEYS.get_or_init(generate_zobrist_keys)
}

fn generate_zobrist_keys() -> ZobristKeys {
    tracing::debug!("generating Zobrist keys");
    let mut rng = XorShiftMul::new(ZOBRIST_SEED);

    // avoid zero keys to reduce degenerate collisions
    let mut non_zero = move || {
        let mut v = rng.next_u64();
        while v == 0 {
            v = rng.next_u64();
        }
        v
    };

    let mut keys = ZobristKeys {
        piece: [[[0u64; 64]; 6]; 2],
        ep_square: [0u64; 64],
        castling: [0u64; 16],
        black_to_move: 0,
    };

    for color in 0..2 {
        for piece in 0..6 {
            for sq in 0..64 {
                keys.piece[color][piece][sq] = non_zero();
            }
        }
    }

    for sq in 0..64 {
        keys.ep_square[sq] = non_zero();
    }

    for pattern in 0..16 {
        keys.castling[pattern] = non_zero();
    }

    keys.black_to_move = non_zero();

    keys
}
