//! Xorshift32 PRNG used to pick which alien fires next.
//!
//! Algorithm: x ^= x << 13; x ^= x >> 17; x ^= x << 5;
//! Deterministic for a given seed, so a session can be replayed exactly.

/// Seed every session starts from.
pub const DEFAULT_SEED: u32 = 13;

#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift
        let state = if seed == 0 { DEFAULT_SEED } else { seed };
        Self { state }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform sample in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform index in `[0, len)`. `len` must be nonzero.
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((len as f64 * self.next_f64()) as usize).min(len.saturating_sub(1))
    }
}
