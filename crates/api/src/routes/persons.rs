use axum::routing::get;
use axum::Router;

use crate::handlers::persons;
use crate::state::AppState;

/// Roster routes mounted at `/persons`.
///
/// ```text
/// GET    /                  -> list_persons
/// GET    /{id}              -> get_person
/// GET    /{id}/summary      -> get_person_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(persons::list_persons))
        .route("/{id}", get(persons::get_person))
        .route("/{id}/summary", get(persons::get_person_summary))
}
