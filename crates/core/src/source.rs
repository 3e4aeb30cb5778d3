//! Source module - the puzzle engine's unit order generator
//!
//! Problem files list the unit shapes once plus a set of seeds. Each seed
//! drives a linear congruential generator whose outputs, taken modulo the
//! number of units, give the order in which units enter the board.

/// LCG multiplier
const MULTIPLIER: u32 = 1103515245;

/// LCG increment
const INCREMENT: u32 = 12345;

/// Linear congruential generator over `u32` (modulus 2^32).
///
/// Each output is bits 30..16 of the current state; the first output is
/// taken from the seed itself, before the first step.
#[derive(Debug, Clone)]
pub struct SourceRng {
    state: u32,
}

impl SourceRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current output, then advance
    pub fn next_value(&mut self) -> u32 {
        let value = (self.state & 0x7fff_ffff) >> 16;
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        value
    }
}

/// The first `length` unit indices for `seed`, for a problem with `unit_count` units.
///
/// Returns an empty order when there are no units.
pub fn unit_order(seed: u32, length: usize, unit_count: usize) -> Vec<usize> {
    if unit_count == 0 {
        return Vec::new();
    }
    let mut rng = SourceRng::new(seed);
    (0..length)
        .map(|_| rng.next_value() as usize % unit_count)
        .collect()
}
