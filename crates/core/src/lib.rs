//! Domain logic for the peer-rating service.
//!
//! Everything in this crate is pure and synchronous: types for the roster
//! and ratings, input validation, leaderboard aggregation, and the cosmetic
//! presentation helpers (avatar selection, roster shuffling).

pub mod error;
pub mod leaderboard;
pub mod person;
pub mod presentation;
pub mod rating;
pub mod types;
