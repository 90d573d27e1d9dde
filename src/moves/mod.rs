pub mod execute;
pub mod jump;
pub mod magic;
pub mod movegen;
pub mod square_control;
pub mod types;

use crate::board::Color;
use magic::{MagicTables, precompute};
use once_cell::sync::OnceCell;
use tracing::info;

/// Every precomputed attack table the move generator needs. Built once at
/// startup, immutable afterwards.
pub struct AttackTables {
    /// Pawn capture targets, `[color][square]`.
    pub pawn: [[u64; 64]; 2],
    pub knight: [u64; 64],
    pub king: [u64; 64],
    pub magics: MagicTables,
}

impl AttackTables {
    #[inline(always)]
    pub fn pawn_attacks(&self, color: Color, square: usize) -> u64 {
        self.pawn[color as usize][square]
    }

    /// The jump tables and the two magic tables are independent, so they are
    /// built concurrently; the scope joins every builder before the value is
    /// published, which is the happens-before barrier the readers rely on.
    fn build() -> AttackTables {
        info!("constructing attack tables");
        std::thread::scope(|scope| {
            let rook = scope.spawn(precompute::generate_rook_tables);
            let bishop = scope.spawn(precompute::generate_bishop_tables);

            let pawn = jump::compute_pawn_attacks();
            let knight = jump::compute_knight_attacks();
            let king = jump::compute_king_attacks();
            info!("jump tables ready");

            let rook = rook.join().expect("rook magic builder panicked");
            info!("rook magic tables ready");
            let bishop = bishop.join().expect("bishop magic builder panicked");
            info!("bishop magic tables ready");

            AttackTables {
                pawn,
                knight,
                king,
                magics: MagicTables { rook, bishop },
            }
        })
    }
}

/// Global attack tables, constructed on first use.
pub fn attack_tables() -> &'static AttackTables {
    static TABLES: OnceCell<AttackTables> = OnceCell::new();
    TABLES.get_or_init(AttackTables::build)
}
