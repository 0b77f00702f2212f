pub mod leaderboard;
pub mod persons;
pub mod ratings;
pub mod sessions;
