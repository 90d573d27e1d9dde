//! Deterministic magic-number search.
//!
//! For every square the relevant-occupancy subsets and their attack sets are
//! enumerated once, then sparse multiplier candidates are drawn from a fixed
//! per-square seed schedule until one hashes every subset without an attack
//! collision. Fixed seeds make the generated tables identical on every run.

use super::attacks::{
    bishop_attacks_from, bishop_relevant_occupancy, rook_attacks_from, rook_relevant_occupancy,
};
use super::structs::{MagicEntry, SliderAttacks};
use crate::rng::XorShiftMul;

/// Seed pool, indexed per square modulo its length.
const MAGIC_SEEDS: [u64; 8] = [728, 10_316, 55_013, 32_803, 12_281, 15_100, 16_645, 255];

/// Candidate cap per square. The fixed seeds converge within a few thousand
/// draws; hitting this limit means the generator itself is broken.
const MAX_CANDIDATES: u32 = 100_000_000;

pub fn generate_rook_tables() -> SliderAttacks {
    generate_slider_tables(rook_relevant_occupancy, rook_attacks_from)
}

pub fn generate_bishop_tables() -> SliderAttacks {
    generate_slider_tables(bishop_relevant_occupancy, bishop_attacks_from)
}

fn generate_slider_tables(
    mask_fn: fn(usize) -> u64,
    attack_fn: fn(usize, u64) -> u64,
) -> SliderAttacks {
    let entries = (0..64).map(|sq| find_magic_entry(sq, mask_fn, attack_fn)).collect();
    SliderAttacks { entries }
}

fn find_magic_entry(
    square: usize,
    mask_fn: fn(usize) -> u64,
    attack_fn: fn(usize, u64) -> u64,
) -> MagicEntry {
    let mask = mask_fn(square);
    let index_bits = mask.count_ones();
    let shift = 64 - index_bits;

    // Enumerate all blocker subsets of the mask with their attack sets.
    let subsets = enumerate_subsets(mask);
    let attacks: Vec<u64> = subsets.iter().map(|&b| attack_fn(square, b)).collect();

    let mut rng = XorShiftMul::new(MAGIC_SEEDS[square % MAGIC_SEEDS.len()]);
    for _ in 0..MAX_CANDIDATES {
        let magic = rng.sparse_u64();
        if let Some(table) = try_fill_table(&subsets, &attacks, magic, shift, index_bits) {
            return MagicEntry {
                magic,
                shift,
                mask,
                table: table.into_boxed_slice(),
            };
        }
    }
    panic!("no magic multiplier found for square {square}");
}

/// All subsets of `mask` via the carry-rippler walk, starting with the
/// empty set.
fn enumerate_subsets(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset: u64 = 0;
    loop {
        subsets.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

/// Attempts to build the attack table for one candidate multiplier. Returns
/// None as soon as two subsets with different attack sets alias the same
/// slot. Attack sets are never empty, so zero marks a vacant slot.
fn try_fill_table(
    subsets: &[u64],
    attacks: &[u64],
    magic: u64,
    shift: u32,
    index_bits: u32,
) -> Option<Vec<u64>> {
    let mut table = vec![0u64; 1usize << index_bits];
    for (&blockers, &attack) in subsets.iter().zip(attacks) {
        let index = (blockers.wrapping_mul(magic) >> shift) as usize;
        let slot = &mut table[index];
        if *slot == 0 {
            *slot = attack;
        } else if *slot != attack {
            return None;
        }
    }
    Some(table)
}
