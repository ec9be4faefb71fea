//! Randomness sources for die rolls.
//!
//! Every roll in the crate draws from a [`RollSource`] passed in by the
//! caller. Production code uses [`SeededRolls`] or [`SharedRolls`]; tests
//! substitute [`FixedRolls`] to force specific faces.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed die faces.
pub trait RollSource {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl RollSource for StdRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }
}

/// A roll source backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct SeededRolls {
    rng: StdRng,
}

impl SeededRolls {
    /// A reproducible source: the same seed yields the same faces.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A source seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RollSource for SeededRolls {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.roll_die(sides)
    }
}

/// Replays a fixed sequence of faces, cycling when exhausted.
///
/// Faces outside `1..=sides` are clamped into range. An empty sequence
/// always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct FixedRolls {
    faces: Vec<u32>,
    next: usize,
}

impl FixedRolls {
    /// Replay `faces` in order.
    pub fn new(faces: impl Into<Vec<u32>>) -> Self {
        Self {
            faces: faces.into(),
            next: 0,
        }
    }

    /// Always roll the same face.
    pub fn always(face: u32) -> Self {
        Self::new(vec![face])
    }

    /// How many faces have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl RollSource for FixedRolls {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let face = if self.faces.is_empty() {
            1
        } else {
            self.faces[self.next % self.faces.len()]
        };
        self.next += 1;
        face.clamp(1, sides.max(1))
    }
}

/// A thread-safe roll source for callers that share one RNG.
///
/// Rolls through `&SharedRolls`, so several threads can hold a reference
/// and draw interleaved results.
#[derive(Debug)]
pub struct SharedRolls {
    rng: Mutex<StdRng>,
}

impl SharedRolls {
    /// A shared, reproducible source.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// A shared source seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Roll one die without needing exclusive access.
    pub fn roll(&self, sides: u32) -> u32 {
        // A panic mid-roll cannot leave the RNG in an invalid state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.roll_die(sides)
    }
}

impl RollSource for &SharedRolls {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.roll(sides)
    }
}
