//! Data structures for the draw: participants, configuration, fixture records.

mod draw;
mod fixture;
mod participant;

pub use draw::{DrawConfig, DrawError, DrawState};
pub use fixture::{DrawResult, FixtureRecord, Opponent, Pairing};
pub use participant::{Participant, Pot};
