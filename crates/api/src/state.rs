use std::sync::Arc;

use classrate_db::{RatingLedger, RosterStore};

use crate::config::ServerConfig;
use crate::sessions::SessionRosters;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Fixed roster of ratable people.
    pub roster: Arc<RosterStore>,
    /// Append-only rating storage.
    pub ledger: Arc<RatingLedger>,
    /// Per-session shuffled roster orders.
    pub sessions: Arc<SessionRosters>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(roster: RosterStore, config: ServerConfig) -> Self {
        let sessions = SessionRosters::new(config.session_capacity);
        Self {
            roster: Arc::new(roster),
            ledger: Arc::new(RatingLedger::new()),
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }
}
