//! DrawConfig, DrawState and DrawError.

use crate::models::participant::Pot;
use serde::{Deserialize, Serialize};

/// Errors that stop a draw before any opponent is assigned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrawError {
    /// No participants were supplied.
    NoParticipants,
    /// A participant's pot is outside `1..=pot_count`.
    PotOutOfRange { name: String, pot: Pot, pot_count: Pot },
    /// Two participants share a name (names are the draw's identity key).
    DuplicateParticipant(String),
    /// The engine is not in a state that allows this step.
    InvalidState,
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::NoParticipants => write!(f, "No participants to draw"),
            DrawError::PotOutOfRange { name, pot, pot_count } => {
                write!(f, "{} is in pot {} but pots run from 1 to {}", name, pot, pot_count)
            }
            DrawError::DuplicateParticipant(name) => {
                write!(f, "Participant {} appears more than once", name)
            }
            DrawError::InvalidState => write!(f, "Invalid state for this step"),
        }
    }
}

impl std::error::Error for DrawError {}

/// Progress of a single draw run. A completed engine is never reused.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawState {
    #[default]
    Unstarted,
    /// Buckets built, still in load order.
    Partitioned,
    /// Each bucket shuffled once.
    Shuffled,
    Assigning,
    Complete,
}

/// Shape of the league phase.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Pots are numbered `1..=pot_count`.
    pub pot_count: Pot,
    /// Opponents drawn from each pot.
    pub per_pot: usize,
    /// Max opponents from one association within a participant's fixtures.
    pub association_cap: usize,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            pot_count: 4,
            per_pot: 2,
            association_cap: 2,
        }
    }
}

impl DrawConfig {
    /// 8 in the canonical configuration.
    pub fn total_opponents(&self) -> usize {
        self.per_pot * self.pot_count as usize
    }

    pub fn home_legs(&self) -> usize {
        self.total_opponents() / 2
    }

    pub fn pots(&self) -> impl Iterator<Item = Pot> {
        1..=self.pot_count
    }
}
