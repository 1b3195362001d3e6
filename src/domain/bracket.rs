use super::series::Match;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Domain model for a tournament bracket: an ordered elimination grouping
/// of matches within a tournament stage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    pub tournament_id: String,
    pub tournament_name: String,
    pub parent_tournament_name: String,
    pub parent_tournament_format: String,
    pub circuit_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub index: i32,
    pub label: String,
    pub format: String,
    pub number_of_teams: Option<i32>,
    pub matches: Vec<Match>,
}
