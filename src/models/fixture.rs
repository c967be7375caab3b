//! Fixture records and the draw result handed to the storage and rendering collaborators.

use crate::models::participant::{Participant, Pot};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Snapshot of an opponent at draw time (not a live reference).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub name: String,
    pub pot: Pot,
    pub association: String,
}

impl From<&Participant> for Opponent {
    fn from(p: &Participant) -> Self {
        Self {
            name: p.name.clone(),
            pot: p.pot,
            association: p.association.clone(),
        }
    }
}

/// One participant's home and away opponents for the league phase.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    pub pot: Pot,
    pub association: String,
    pub home: Vec<Opponent>,
    pub away: Vec<Opponent>,
}

impl FixtureRecord {
    /// Split an accumulated opponent sequence positionally: the first `home_legs`
    /// are home fixtures, the rest away.
    pub fn from_sequence(owner: &Participant, mut opponents: Vec<Opponent>, home_legs: usize) -> Self {
        let away = if opponents.len() > home_legs {
            opponents.split_off(home_legs)
        } else {
            Vec::new()
        };
        Self {
            pot: owner.pot,
            association: owner.association.clone(),
            home: opponents,
            away,
        }
    }

    pub fn opponent_count(&self) -> usize {
        self.home.len() + self.away.len()
    }

    /// Home then away opponents.
    pub fn opponents(&self) -> impl Iterator<Item = &Opponent> {
        self.home.iter().chain(self.away.iter())
    }

    pub fn faces(&self, name: &str) -> bool {
        self.opponents().any(|o| o.name == name)
    }
}

/// A single match as shown on the web page.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Pairing {
    pub home: String,
    pub away: String,
}

/// Full draw output: participant name -> fixture record.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawResult {
    pub fixtures: BTreeMap<String, FixtureRecord>,
}

impl DrawResult {
    pub fn get(&self, name: &str) -> Option<&FixtureRecord> {
        self.fixtures.get(name)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FixtureRecord)> {
        self.fixtures.iter()
    }

    /// Every fixture as a home/away pair, deduplicated and sorted.
    /// A home leg of A against B and an away leg of B at A describe the same match.
    pub fn pairings(&self) -> Vec<Pairing> {
        let mut set = BTreeSet::new();
        for (name, record) in &self.fixtures {
            for o in &record.home {
                set.insert(Pairing {
                    home: name.clone(),
                    away: o.name.clone(),
                });
            }
            for o in &record.away {
                set.insert(Pairing {
                    home: o.name.clone(),
                    away: name.clone(),
                });
            }
        }
        set.into_iter().collect()
    }

    pub(crate) fn insert(&mut self, name: String, record: FixtureRecord) {
        self.fixtures.insert(name, record);
    }
}
