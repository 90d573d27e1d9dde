/// Deterministic xorshift-multiply generator.
///
/// Both the magic-number search and the Zobrist keys are drawn from this
/// generator with fixed seeds, so the produced tables and hashes are
/// byte-identical across runs.
pub struct XorShiftMul {
    state: u64,
}

impl XorShiftMul {
    /// The seed must be non-zero; an all-zero state is a fixed point of the
    /// xorshift recurrence.
    pub fn new(seed: u64) -> Self {
        debug_assert!(seed != 0, "xorshift seed must be non-zero");
        XorShiftMul { state: seed }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(2_685_821_657_736_338_717)
    }

    /// AND of three draws. Sparse candidates collide less often in the
    /// magic multiply-shift indexing.
    #[inline]
    pub fn sparse_u64(&mut self) -> u64 {
        self.next_u64() & self.next_u64() & self.next_u64()
    }
}
