//! Pot partitioning: group participants into seeding pots.

use crate::models::{DrawConfig, DrawError, Participant, Pot};
use std::collections::{BTreeMap, HashSet};

/// Pot number -> participants in that pot. Every configured pot has an entry.
pub type PotBuckets = BTreeMap<Pot, Vec<Participant>>;

/// Group participants by pot, keeping load order inside each bucket.
///
/// Fails on an empty set, a duplicated name, or a pot outside `1..=pot_count`.
pub fn partition_by_pot(
    participants: &[Participant],
    config: &DrawConfig,
) -> Result<PotBuckets, DrawError> {
    if participants.is_empty() {
        return Err(DrawError::NoParticipants);
    }

    let mut buckets: PotBuckets = config.pots().map(|pot| (pot, Vec::new())).collect();
    let mut seen = HashSet::new();

    for p in participants {
        if !seen.insert(p.name.as_str()) {
            return Err(DrawError::DuplicateParticipant(p.name.clone()));
        }
        let bucket = buckets.get_mut(&p.pot).ok_or_else(|| DrawError::PotOutOfRange {
            name: p.name.clone(),
            pot: p.pot,
            pot_count: config.pot_count,
        })?;
        bucket.push(p.clone());
    }

    Ok(buckets)
}
