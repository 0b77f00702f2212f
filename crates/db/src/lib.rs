//! In-memory storage for the roster and the rating ledger.
//!
//! Both collections live for the lifetime of the process. The roster is
//! seeded once and read-only; the ledger is append-only.

use std::path::PathBuf;

pub mod ledger;
pub mod roster;

pub use ledger::RatingLedger;
pub use roster::{load_roster, RosterStore};

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Failed to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roster data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate person id in roster: {0}")]
    DuplicateId(String),

    #[error("Roster is empty")]
    EmptyRoster,
}
