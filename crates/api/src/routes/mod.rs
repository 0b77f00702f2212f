pub mod health;
pub mod leaderboard;
pub mod persons;
pub mod ratings;
pub mod sessions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /persons                          list (GET, ?role=&search=)
/// /persons/{id}                     get (GET)
/// /persons/{id}/summary             rank, breakdown, comments (GET)
///
/// /ratings                          list, create (GET, POST)
/// /ratings/person/{id}              list for one person (GET)
///
/// /leaderboard                      ranked roster (GET)
///
/// /sessions/{session_id}/roster     stable shuffled roster (GET)
/// ```
///
/// Neither persons nor ratings can be updated or deleted through this tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/persons", persons::router())
        .nest("/ratings", ratings::router())
        .nest("/leaderboard", leaderboard::router())
        .nest("/sessions", sessions::router())
}
