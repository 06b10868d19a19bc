//! # Dice
//!
//! One or two six-sided dice backed by an injectable face source.

use crate::{SerpentineError, SerpentineResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// How many dice are thrown per roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DiceMode {
    #[default]
    Single,
    Double,
}

impl DiceMode {
    /// Number of dice thrown.
    pub fn count(self) -> usize {
        match self {
            DiceMode::Single => 1,
            DiceMode::Double => 2,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            DiceMode::Single => DiceMode::Double,
            DiceMode::Double => DiceMode::Single,
        }
    }
}

/// Outcome of one roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die faces, for display
    pub values: Vec<u8>,
    /// Total used for movement
    pub sum: u8,
}

impl RollResult {
    /// Builds a result from individual faces.
    pub fn from_values(values: Vec<u8>) -> Self {
        let sum = values.iter().sum();
        Self { values, sum }
    }
}

/// Produces die faces in `1..=6`.
pub trait DiceSource {
    /// Returns the next face.
    fn next_face(&mut self) -> u8;
}

/// Uniformly random faces from any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomDice<R = StdRng> {
    rng: R,
}

impl RandomDice<StdRng> {
    /// Reproducible dice for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Dice seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomDice<R> {
    /// Wraps an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DiceSource for RandomDice<R> {
    fn next_face(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of faces, starting over when it runs out.
///
/// # Examples
///
/// ```
/// use serpentine::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new(vec![6, 2]).unwrap();
/// assert_eq!(dice.next_face(), 6);
/// assert_eq!(dice.next_face(), 2);
/// assert_eq!(dice.next_face(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Creates a script. Every face must be in `1..=6` and the script must
    /// not be empty.
    pub fn new(faces: Vec<u8>) -> SerpentineResult<Self> {
        if faces.is_empty() {
            return Err(SerpentineError::ConfigError(
                "scripted dice need at least one face".to_string(),
            ));
        }
        if let Some(face) = faces.iter().find(|f| !(1..=DIE_FACES).contains(*f)) {
            return Err(SerpentineError::ConfigError(format!(
                "scripted face {} is not on a six-sided die",
                face
            )));
        }
        Ok(Self { faces, cursor: 0 })
    }
}

impl DiceSource for ScriptedDice {
    fn next_face(&mut self) -> u8 {
        let face = self.faces[self.cursor];
        self.cursor = (self.cursor + 1) % self.faces.len();
        face
    }
}

/// Throws dice according to the current [`DiceMode`].
pub struct DiceRoller {
    source: Box<dyn DiceSource>,
}

impl fmt::Debug for DiceRoller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiceRoller").finish_non_exhaustive()
    }
}

impl DiceRoller {
    /// Creates a roller drawing faces from `source`.
    pub fn new(source: Box<dyn DiceSource>) -> Self {
        Self { source }
    }

    /// Reproducible roller for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(RandomDice::seeded(seed)))
    }

    /// Throws one die for [`DiceMode::Single`] or two for
    /// [`DiceMode::Double`].
    pub fn roll(&mut self, mode: DiceMode) -> RollResult {
        let values = (0..mode.count()).map(|_| self.source.next_face()).collect();
        RollResult::from_values(values)
    }
}
