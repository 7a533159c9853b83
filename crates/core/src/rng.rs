//! RNG module - deterministic randomness for the gravity pass
//!
//! The only randomness in the engine is the coin flip that picks which
//! side a blocked Rock/Diamond tries to slide to. It sits behind the
//! [`SlideRng`] trait so tests can force either branch; the game uses
//! the seedable [`SimpleRng`] LCG so whole runs replay identically from
//! one seed.

/// Source of the slide-side coin flip.
pub trait SlideRng {
    /// One fair coin flip: `true` means try the right side first.
    fn coin(&mut self) -> bool;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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
}

impl SlideRng for SimpleRng {
    fn coin(&mut self) -> bool {
        // Low bits of an LCG are weak; use a high bit.
        self.next_u32() & 0x8000_0000 != 0
    }
}

/// Fixed-answer RNG for tests that need a specific slide side.
#[derive(Debug, Clone, Copy)]
pub struct FixedRng(pub bool);

impl SlideRng for FixedRng {
    fn coin(&mut self) -> bool {
        self.0
    }
}
