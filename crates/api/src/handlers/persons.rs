//! Handlers for the read-only roster.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use classrate_core::error::CoreError;
use classrate_core::leaderboard::person_summary;
use classrate_core::person::Role;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Optional filters for the roster listing.
#[derive(Debug, Default, Deserialize)]
pub struct PersonListParams {
    pub role: Option<Role>,
    pub search: Option<String>,
}

/// GET /api/persons
///
/// List roster entries in seed order, optionally filtered by role and by a
/// case-insensitive name fragment.
pub async fn list_persons(
    State(state): State<AppState>,
    Query(params): Query<PersonListParams>,
) -> AppResult<impl IntoResponse> {
    let search = params.search.as_deref().filter(|s| !s.is_empty());
    let persons = state.roster.filter(params.role, search);

    Ok(Json(persons))
}

/// GET /api/persons/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let person = state
        .roster
        .get(&id)
        .cloned()
        .ok_or_else(|| person_not_found(id))?;

    Ok(Json(person))
}

/// GET /api/persons/{id}/summary
///
/// Leaderboard rank, mean rating, per-criterion breakdown and commented
/// ratings for one person.
pub async fn get_person_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let ratings = state.ledger.list().await;

    let summary = person_summary(state.roster.list(), &ratings, &id)
        .ok_or_else(|| person_not_found(id))?;

    Ok(Json(summary))
}

pub(crate) fn person_not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Person",
        id,
    })
}
