//! Per-session roster order cache.
//!
//! A browsing session sees the roster in one random order that stays put
//! until the session ends, so a rating pass is not reshuffled under the
//! user. The permutation is drawn once, on the first request for a session,
//! and replayed afterwards.

use classrate_core::person::Person;
use classrate_core::presentation::shuffle_roster;
use classrate_core::types::EntityId;
use classrate_db::RosterStore;
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

/// Longest accepted session identifier.
pub const MAX_SESSION_ID_LENGTH: usize = 128;

struct Inner {
    /// Session id -> person ids in presentation order, oldest session first.
    orders: IndexMap<String, Vec<EntityId>>,
    rng: StdRng,
}

/// Bounded cache of shuffled roster orders keyed by session id.
///
/// When full, the oldest session is evicted to make room.
pub struct SessionRosters {
    inner: Mutex<Inner>,
    capacity: usize,
}

impl SessionRosters {
    /// Cache seeded from the operating system's entropy source.
    pub fn new(capacity: usize) -> Self {
        Self::with_rng(capacity, StdRng::from_os_rng())
    }

    /// Cache with a fixed seed, for reproducible orders.
    pub fn with_seed(capacity: usize, seed: u64) -> Self {
        Self::with_rng(capacity, StdRng::seed_from_u64(seed))
    }

    fn with_rng(capacity: usize, rng: StdRng) -> Self {
        Self {
            inner: Mutex::new(Inner {
                orders: IndexMap::new(),
                rng,
            }),
            capacity: capacity.max(1),
        }
    }

    /// The roster in `session_id`'s order, shuffling on first use.
    pub async fn order_for(&self, session_id: &str, roster: &RosterStore) -> Vec<Person> {
        let mut inner = self.inner.lock().await;

        if let Some(ids) = inner.orders.get(session_id) {
            return ids
                .iter()
                .filter_map(|id| roster.get(id))
                .cloned()
                .collect();
        }

        if inner.orders.len() >= self.capacity {
            if let Some((evicted, _)) = inner.orders.shift_remove_index(0) {
                tracing::debug!(session_id = %evicted, "Evicted session roster order");
            }
        }

        let Inner { orders, rng } = &mut *inner;
        let shuffled = shuffle_roster(roster.list(), rng);
        orders.insert(
            session_id.to_string(),
            shuffled.iter().map(|p| p.id.clone()).collect(),
        );
        tracing::debug!(session_id, "Shuffled roster for new session");

        shuffled
    }

    /// Number of sessions currently cached.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.orders.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
