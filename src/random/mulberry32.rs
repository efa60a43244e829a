//! Mulberry32 step function
//!
//! 32-bit state, one add and two multiply-xorshift rounds per draw. Output is
//! bit-for-bit identical to the common JavaScript formulation, so sequences
//! recorded in the browser replay exactly here.

use crate::constants::{MULBERRY32_INCREMENT, U32_RANGE};

/// Raw mulberry32 generator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator whose first draw derives from `seed`
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advance one step and return the raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY32_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Advance one step and return a float in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }
}
