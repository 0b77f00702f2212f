use axum::routing::get;
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Session routes mounted at `/sessions`.
///
/// ```text
/// GET    /{session_id}/roster   -> get_session_roster
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{session_id}/roster", get(sessions::get_session_roster))
}
