// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Injectable randomness for the transform rules.
//!
//! Every optional rewrite is an independent Bernoulli trial: the rule draws one
//! roll in `[0, 1)` and compares it to a threshold derived from the intensity.
//! Picking a replacement from a list also consumes exactly one roll, so a
//! [`ScriptedRandom`] can drive a transform down a known path.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource: Send {
    /// Uniform roll in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Uniform index in `[0, len)`; `0` when `len` is zero.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.roll() * len as f64) as usize).min(len - 1)
    }

    /// Pick one item from a non-empty list, or `""` when the list is empty.
    fn choose<'a>(&mut self, items: &'a [String]) -> &'a str {
        if items.is_empty() {
            return "";
        }
        let index = self.pick(items.len());
        &items[index]
    }
}

/// Rolls from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn roll(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible rolls from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn roll(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of rolls, then repeats `fallback` forever.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    rolls: Vec<f64>,
    position: usize,
    fallback: f64,
}

impl ScriptedRandom {
    pub fn new(rolls: Vec<f64>, fallback: f64) -> Self {
        Self {
            rolls,
            position: 0,
            fallback,
        }
    }

    /// Every roll returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(Vec::new(), value)
    }

    /// Number of rolls consumed so far.
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRandom {
    fn roll(&mut self) -> f64 {
        let value = self.rolls.get(self.position).copied().unwrap_or(self.fallback);
        self.position += 1;
        value
    }
}
