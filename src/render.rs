//! Plain-text draw document.

use crate::models::{DrawResult, Opponent};
use std::fmt;

pub const DOCUMENT_TITLE: &str = "League phase draw";

/// Display adapter laying out a draw as a document.
pub struct DrawDocument<'a>(pub &'a DrawResult);

fn write_opponent(f: &mut fmt::Formatter<'_>, o: &Opponent) -> fmt::Result {
    writeln!(f, "  - {} (Pot {}, League: {})", o.name, o.pot, o.association)
}

impl fmt::Display for DrawDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", DOCUMENT_TITLE)?;
        writeln!(f, "{}", "=".repeat(DOCUMENT_TITLE.len()))?;
        writeln!(f)?;

        for (name, record) in self.0.iter() {
            writeln!(f, "{} (Pot {}, League: {})", name, record.pot, record.association)?;
            writeln!(f, "Home matches:")?;
            for o in &record.home {
                write_opponent(f, o)?;
            }
            writeln!(f, "Away matches:")?;
            for o in &record.away {
                write_opponent(f, o)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the draw as a document: one block per participant with its home and away opponents.
pub fn render_text(result: &DrawResult) -> String {
    DrawDocument(result).to_string()
}
