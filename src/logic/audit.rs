//! Draw audit: check a finished draw's shape and report short fixture lists.

use crate::models::{DrawConfig, DrawResult};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A participant that received fewer opponents than configured. Expected, not an error.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ShortFixture {
    pub name: String,
    pub expected: usize,
    pub actual: usize,
}

/// A broken draw rule.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    SameAssociation { participant: String, opponent: String },
    AssociationCapExceeded { participant: String, association: String, count: usize },
    DuplicateOpponent { participant: String, opponent: String },
    /// Home legs exceed half the total, or a full list is not split evenly.
    Unbalanced { participant: String, home: usize, away: usize },
    Oversized { participant: String, count: usize },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::SameAssociation { participant, opponent } => {
                write!(f, "{} drew {} from its own association", participant, opponent)
            }
            Violation::AssociationCapExceeded { participant, association, count } => {
                write!(f, "{} drew {} opponents from {}", participant, count, association)
            }
            Violation::DuplicateOpponent { participant, opponent } => {
                write!(f, "{} drew {} more than once", participant, opponent)
            }
            Violation::Unbalanced { participant, home, away } => {
                write!(f, "{} has {} home and {} away fixtures", participant, home, away)
            }
            Violation::Oversized { participant, count } => {
                write!(f, "{} has {} opponents", participant, count)
            }
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DrawAudit {
    pub short_fixtures: Vec<ShortFixture>,
    pub violations: Vec<Violation>,
    /// Number of times A lists B but B does not list A. Informational; the draw does not
    /// make fixtures symmetric.
    pub asymmetric_pairings: usize,
}

impl DrawAudit {
    /// No rule broken. Short fixture lists do not count against validity.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check every record of `result`. Accepts results built outside the engine too
/// (loaded or hand-made), so it also flags oversized lists and too many home legs.
pub fn audit_draw(result: &DrawResult, config: &DrawConfig) -> DrawAudit {
    let total = config.total_opponents();
    let home_legs = config.home_legs();
    let mut audit = DrawAudit::default();

    for (name, record) in result.iter() {
        let count = record.opponent_count();
        if count > total {
            audit.violations.push(Violation::Oversized {
                participant: name.clone(),
                count,
            });
        } else if count < total {
            audit.short_fixtures.push(ShortFixture {
                name: name.clone(),
                expected: total,
                actual: count,
            });
        }

        let (home, away) = (record.home.len(), record.away.len());
        if home > home_legs || (count == total && home != away) {
            audit.violations.push(Violation::Unbalanced {
                participant: name.clone(),
                home,
                away,
            });
        }

        let mut seen = HashSet::new();
        let mut per_association: HashMap<&str, usize> = HashMap::new();
        for o in record.opponents() {
            if o.association == record.association {
                audit.violations.push(Violation::SameAssociation {
                    participant: name.clone(),
                    opponent: o.name.clone(),
                });
            }
            if !seen.insert(o.name.as_str()) {
                audit.violations.push(Violation::DuplicateOpponent {
                    participant: name.clone(),
                    opponent: o.name.clone(),
                });
            }
            *per_association.entry(o.association.as_str()).or_insert(0) += 1;
        }

        let mut over: Vec<_> = per_association
            .into_iter()
            .filter(|(_, n)| *n > config.association_cap)
            .collect();
        over.sort();
        for (association, n) in over {
            audit.violations.push(Violation::AssociationCapExceeded {
                participant: name.clone(),
                association: association.to_string(),
                count: n,
            });
        }

        audit.asymmetric_pairings += record
            .opponents()
            .filter(|o| result.get(&o.name).map_or(true, |r| !r.faces(name)))
            .count();
    }

    audit
}
