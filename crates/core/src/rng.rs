//! RNG module - deterministic scatter for the confetti effect
//!
//! A small LCG is enough here: the congratulations screen sprinkles a handful
//! of colored pixels every frame, and tests want the sequence to be
//! reproducible from a seed.

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

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`; `max == 0` yields 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are the better-distributed ones.
        (self.next_u32() >> 8) % max
    }
}

/// One confetti particle: screen position plus an index into a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speck {
    pub x: i32,
    pub y: i32,
    pub palette_index: usize,
}

/// `count` specks scattered over `[0, width) × [0, height)`.
pub fn scatter(seed: u32, count: usize, width: u32, height: u32, palette_len: usize) -> Vec<Speck> {
    let mut rng = SimpleRng::new(seed);
    (0..count)
        .map(|_| Speck {
            x: rng.next_range(width) as i32,
            y: rng.next_range(height) as i32,
            palette_index: rng.next_range(palette_len as u32) as usize,
        })
        .collect()
}
