//! Handlers for the rating ledger.
//!
//! Ratings can be listed and created. There is deliberately no route to
//! update or delete one.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use classrate_core::rating::CreateRating;

use crate::error::AppResult;
use crate::handlers::persons::person_not_found;
use crate::state::AppState;

/// GET /api/ratings
pub async fn list_ratings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ratings = state.ledger.list().await;

    Ok(Json(ratings))
}

/// GET /api/ratings/person/{id}
///
/// Empty array when the person has no ratings or is not on the roster.
pub async fn list_ratings_by_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let ratings = state.ledger.list_by_person(&person_id).await;

    Ok(Json(ratings))
}

/// POST /api/ratings
///
/// Validate the submission, check the person exists, then append. Nothing
/// is written unless every check passes.
pub async fn create_rating(
    State(state): State<AppState>,
    payload: Result<Json<CreateRating>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let new_rating = input.into_new_rating()?;

    if !state.roster.contains(&new_rating.person_id) {
        tracing::debug!(person_id = %new_rating.person_id, "Rating rejected for unknown person");
        return Err(person_not_found(new_rating.person_id));
    }

    let rating = state.ledger.create(new_rating).await;

    tracing::info!(
        rating_id = %rating.id,
        person_id = %rating.person_id,
        average = rating.average,
        has_comment = rating.has_comment(),
        "Rating created",
    );

    Ok((StatusCode::CREATED, Json(rating)))
}
