//! Draw logic: pot partitioning, opponent selection, the draw engine and its audit.

mod audit;
mod engine;
mod pots;
mod selector;

pub use audit::{audit_draw, DrawAudit, ShortFixture, Violation};
pub use engine::{make_draw, DrawEngine};
pub use pots::{partition_by_pot, PotBuckets};
pub use selector::{select_opponents, AssociationCounts};
