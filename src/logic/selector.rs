//! Opponent selection for one participant from one pot.

use crate::models::{DrawConfig, Participant};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Running count of drawn opponents per association, scoped to one participant's fixtures.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AssociationCounts(HashMap<String, usize>);

impl AssociationCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, association: &str) -> usize {
        self.0.get(association).copied().unwrap_or(0)
    }

    /// True if one more opponent from `association` stays within `cap`.
    pub fn has_room(&self, association: &str, cap: usize) -> bool {
        self.get(association) < cap
    }

    pub fn record(&mut self, association: &str) {
        *self.0.entry(association.to_string()).or_insert(0) += 1;
    }
}

/// Pick up to `config.per_pot` opponents for `requester` out of `bucket`.
///
/// Candidates are the bucket minus the requester and minus its own association,
/// visited in a fresh random order. A candidate is accepted only if its association
/// still has room under `config.association_cap`; accepted associations are recorded
/// in `counts` so later pots see the cumulative total.
///
/// Returns fewer than the quota when the bucket cannot supply enough eligible clubs.
pub fn select_opponents<'a, R: Rng + ?Sized>(
    requester: &Participant,
    bucket: &'a [Participant],
    counts: &mut AssociationCounts,
    config: &DrawConfig,
    rng: &mut R,
) -> Vec<&'a Participant> {
    let mut candidates: Vec<&Participant> = bucket
        .iter()
        .filter(|c| !c.is(requester) && !c.shares_association(requester))
        .collect();
    candidates.shuffle(rng);

    let mut picked = Vec::with_capacity(config.per_pot);
    for candidate in candidates {
        if picked.len() == config.per_pot {
            break;
        }
        if !counts.has_room(&candidate.association, config.association_cap) {
            continue;
        }
        counts.record(&candidate.association);
        picked.push(candidate);
    }
    picked
}
