//! League phase draw: pot-based opponent assignment with association rules,
//! plus loading, saving and rendering of the result.

pub mod logic;
pub mod models;
pub mod render;
pub mod storage;

pub use logic::{
    audit_draw, make_draw, partition_by_pot, select_opponents, AssociationCounts, DrawAudit,
    DrawEngine, PotBuckets, ShortFixture, Violation,
};
pub use models::{
    DrawConfig, DrawError, DrawResult, DrawState, FixtureRecord, Opponent, Pairing, Participant,
    Pot,
};
pub use render::{render_text, DrawDocument};
pub use storage::{
    load_participants, load_participants_csv, load_participants_json, save_results, StorageError,
};
