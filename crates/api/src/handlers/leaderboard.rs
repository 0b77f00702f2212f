use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use classrate_core::leaderboard::build_leaderboard;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/leaderboard
///
/// Every person with their mean rating and rating count, best first.
/// Recomputed from the ledger on each call.
pub async fn get_leaderboard(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ratings = state.ledger.list().await;
    let board = build_leaderboard(state.roster.list(), &ratings);

    Ok(Json(board))
}
