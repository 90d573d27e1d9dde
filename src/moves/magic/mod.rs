pub mod attacks;
pub mod precompute;
pub mod structs;

pub use structs::{MagicEntry, MagicTables, SliderAttacks};
