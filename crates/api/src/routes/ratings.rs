use axum::routing::get;
use axum::Router;

use crate::handlers::ratings;
use crate::state::AppState;

/// Rating routes mounted at `/ratings`.
///
/// ```text
/// GET    /                  -> list_ratings
/// POST   /                  -> create_rating
/// GET    /person/{id}       -> list_ratings_by_person
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ratings::list_ratings).post(ratings::create_rating))
        .route("/person/{id}", get(ratings::list_ratings_by_person))
}
