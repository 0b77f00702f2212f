//! Handler for the per-session shuffled roster.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use classrate_core::person::Person;
use classrate_core::presentation::avatar_for;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::sessions::MAX_SESSION_ID_LENGTH;
use crate::state::AppState;

/// A roster entry as shown on a rating card.
#[derive(Debug, Serialize)]
pub struct RosterCard {
    #[serde(flatten)]
    pub person: Person,
    pub avatar: &'static str,
}

/// GET /api/sessions/{session_id}/roster
///
/// The roster in this session's stable random order.
pub async fn get_session_roster(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    validate_session_id(&session_id)?;

    let cards: Vec<RosterCard> = state
        .sessions
        .order_for(&session_id, &state.roster)
        .await
        .into_iter()
        .map(|person| RosterCard {
            avatar: avatar_for(&person),
            person,
        })
        .collect();

    Ok(Json(cards))
}

fn validate_session_id(session_id: &str) -> Result<(), AppError> {
    if session_id.is_empty() || session_id.len() > MAX_SESSION_ID_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Session id must be 1 to {MAX_SESSION_ID_LENGTH} bytes long"
        )));
    }
    if !session_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::BadRequest(
            "Session id may only contain letters, digits, '-' and '_'".to_string(),
        ));
    }
    Ok(())
}
