use classrate_core::rating::{NewRating, Rating};
use classrate_core::types::EntityId;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Append-only store of submitted ratings, keyed by generated id.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Iteration follows insertion order.
pub struct RatingLedger {
    ratings: RwLock<IndexMap<EntityId, Rating>>,
}

impl RatingLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            ratings: RwLock::new(IndexMap::new()),
        }
    }

    /// Every rating ever created.
    pub async fn list(&self) -> Vec<Rating> {
        self.ratings.read().await.values().cloned().collect()
    }

    /// Ratings whose `person_id` equals `person_id`. Empty when there are
    /// none, including for ids that are not on the roster.
    pub async fn list_by_person(&self, person_id: &str) -> Vec<Rating> {
        self.ratings
            .read()
            .await
            .values()
            .filter(|r| r.person_id == person_id)
            .cloned()
            .collect()
    }

    pub async fn count(&self) -> usize {
        self.ratings.read().await.len()
    }

    /// Append a validated rating under a fresh UUID.
    ///
    /// Id assignment and insertion happen under the same write lock, so
    /// concurrent calls never share an id.
    pub async fn create(&self, new: NewRating) -> Rating {
        let mut ratings = self.ratings.write().await;

        let mut id = Uuid::new_v4().to_string();
        while ratings.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        let rating = Rating::from_new(id.clone(), new);
        ratings.insert(id, rating.clone());
        rating
    }
}

impl Default for RatingLedger {
    fn default() -> Self {
        Self::new()
    }
}
