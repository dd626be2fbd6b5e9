//! Randomness seam for the simulation
//!
//! The only random draws are enemy wander headings and the user-ball spawn
//! offset. Sessions use a seeded `Pcg32`; tests can script exact values.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform samples
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform angle in `[0, 2π)`
    fn next_angle(&mut self) -> f32 {
        self.next_unit() * TAU
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded PCG generator (the default session source)
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed sequence of unit samples, then repeats the last one
/// (or 0.0 if the sequence was empty).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<f32>,
    last: f32,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            last: 0.0,
        }
    }

    /// A source that always returns `value`
    pub fn constant(value: f32) -> Self {
        Self {
            values: VecDeque::new(),
            last: value,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        if let Some(v) = self.values.pop_front() {
            self.last = v;
        }
        self.last
    }
}
