use axum::routing::get;
use axum::Router;

use crate::handlers::leaderboard;
use crate::state::AppState;

/// Leaderboard route mounted at `/leaderboard`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(leaderboard::get_leaderboard))
}
