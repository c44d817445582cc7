//! RNG module - deterministic spawn color generation
//!
//! A simple seeded LCG keeps the core zero-I/O and makes every fill and
//! cascade reproducible from a `GridConfig` seed, which the test suite
//! leans on heavily.

use crate::types::DropColor;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
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
        self.next_u32() % max
    }

    /// Draw a uniformly random color from the first `num_colors` palette
    /// entries. `num_colors` must be in `1..=DropColor::COUNT`, which
    /// `GridConfig::validate` guarantees upstream.
    pub fn next_color(&mut self, num_colors: u8) -> DropColor {
        let index = self.next_range(num_colors as u32) as u8;
        DropColor::from_index(index).unwrap_or(DropColor::Red)
    }

    /// Get the current RNG state (exported in snapshots so a host can
    /// recreate the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}
