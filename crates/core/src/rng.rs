//! RNG module - deterministic food placement
//!
//! A small LCG keeps every session reproducible from its seed, which is what
//! the tests and benchmarks rely on.

use crate::types::Cell;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed, state }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 8) % max.max(1)
    }

    /// Pick one cell uniformly from `cells`, or `None` when there is nothing to pick.
    pub fn choose(&mut self, cells: &[Cell]) -> Option<Cell> {
        if cells.is_empty() {
            return None;
        }
        let i = self.next_range(cells.len() as u32) as usize;
        cells.get(i).copied()
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
