//! Participant (club) taking part in the draw.

use serde::{Deserialize, Serialize};

/// Seeding pot number (1-based).
pub type Pot = u8;

/// A club entered into the league phase. Identity is the name.
/// French keys (`nom`, `pays`, `championnat`, `chapeau`) are accepted for older team files.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(alias = "nom")]
    pub name: String,
    /// Informational only; never used by the draw rules.
    #[serde(default, alias = "pays")]
    pub country: String,
    /// Domestic league. Only compared for equality.
    #[serde(alias = "championnat")]
    pub association: String,
    #[serde(alias = "chapeau")]
    pub pot: Pot,
}

impl Participant {
    pub fn new(name: impl Into<String>, association: impl Into<String>, pot: Pot) -> Self {
        Self {
            name: name.into(),
            country: String::new(),
            association: association.into(),
            pot,
        }
    }

    /// Same as [`Participant::new`] with a country attached.
    pub fn with_country(
        name: impl Into<String>,
        country: impl Into<String>,
        association: impl Into<String>,
        pot: Pot,
    ) -> Self {
        Self {
            country: country.into(),
            ..Self::new(name, association, pot)
        }
    }

    /// Identity comparison. Two records with the same name are the same club.
    pub fn is(&self, other: &Participant) -> bool {
        self.name == other.name
    }

    pub fn shares_association(&self, other: &Participant) -> bool {
        self.association == other.association
    }
}
