//! Leaderboard aggregation over the roster and the rating ledger.
//!
//! Nothing here is cached: every view is recomputed from the current
//! contents of both collections. A person without ratings has an average of
//! `0.0`, which clients render as "no rating yet".

use serde::Serialize;

use crate::person::Person;
use crate::presentation::avatar_for;
use crate::rating::Rating;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(flatten)]
    pub person: Person,
    pub average_rating: f64,
    pub total_ratings: usize,
    pub ratings: Vec<Rating>,
    pub avatar: &'static str,
}

/// Mean of each criterion across a person's ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CriteriaBreakdown {
    pub beauty: f64,
    pub funny: f64,
    pub personality: f64,
    pub intelligence: f64,
}

/// Detail view for a single person.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    /// 1-based position in the leaderboard.
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
    pub breakdown: CriteriaBreakdown,
    pub comments: Vec<Rating>,
}

/// Mean of the `average` field of `ratings`, or `0.0` when empty.
pub fn average_rating(ratings: &[Rating]) -> f64 {
    mean(ratings.iter().map(|r| r.average))
}

/// Rank every person by their mean rating, highest first.
///
/// The sort is stable, so people with equal averages (including everyone
/// still at zero) keep their roster order.
pub fn build_leaderboard(persons: &[Person], ratings: &[Rating]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = persons
        .iter()
        .map(|person| {
            let for_person: Vec<Rating> = ratings
                .iter()
                .filter(|r| r.person_id == person.id)
                .cloned()
                .collect();
            LeaderboardEntry {
                average_rating: average_rating(&for_person),
                total_ratings: for_person.len(),
                ratings: for_person,
                avatar: avatar_for(person),
                person: person.clone(),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
    entries
}

/// Per-criterion means. All zero when there are no ratings.
pub fn criteria_breakdown(ratings: &[Rating]) -> CriteriaBreakdown {
    CriteriaBreakdown {
        beauty: mean(ratings.iter().map(|r| f64::from(r.beauty))),
        funny: mean(ratings.iter().map(|r| f64::from(r.funny))),
        personality: mean(ratings.iter().map(|r| f64::from(r.personality))),
        intelligence: mean(ratings.iter().map(|r| f64::from(r.intelligence))),
    }
}

/// Detail view for `person_id`, or `None` if the person is not on the
/// roster.
pub fn person_summary(
    persons: &[Person],
    ratings: &[Rating],
    person_id: &str,
) -> Option<PersonSummary> {
    let board = build_leaderboard(persons, ratings);
    let (index, entry) = board
        .into_iter()
        .enumerate()
        .find(|(_, e)| e.person.id == person_id)?;

    let breakdown = criteria_breakdown(&entry.ratings);
    let comments = entry
        .ratings
        .iter()
        .filter(|r| r.has_comment())
        .cloned()
        .collect();

    Some(PersonSummary {
        rank: index + 1,
        entry,
        breakdown,
        comments,
    })
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
