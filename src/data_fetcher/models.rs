//! Wire models for the BLAST v2 API
//!
//! These structs mirror the JSON payloads exactly and carry no derived
//! logic; the processors module converts them into domain types. Two match
//! shapes exist on the wire: the matches endpoint (`ApiMatch`) has no
//! live/completed flags, while the brackets endpoint (`ApiBracketMatch`)
//! carries them explicitly together with bracket destinations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiTournament {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub circuit_id: String,
    pub prize_pool: String,
    pub location: String,
    pub number_of_teams: Option<i32>,
    pub external_id: Option<String>,
    pub region: String,
    pub grouping: String,
    pub description: String,
}

/// A match from the matches endpoint. Status is not present on the wire
/// and has to be inferred from the per-map timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiMatch {
    pub id: String,
    pub name: String,
    pub scheduled_at: String,
    #[serde(rename = "type")]
    pub match_type: String,
    pub index: i32,
    pub external_id: Option<String>,
    pub team_a: ApiMatchTeam,
    pub team_b: ApiMatchTeam,
    pub team_a_score: i32,
    pub team_b_score: i32,
    pub maps: Vec<ApiMatchMap>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiMatchTeam {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub nationality: String,
    pub external_id: Option<String>,
}

/// A single map (game) from the matches endpoint. `started_at` and
/// `ended_at` are empty strings until the map has started/ended.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiMatchMap {
    pub id: String,
    pub name: String,
    pub scheduled_at: String,
    pub started_at: String,
    pub ended_at: String,
    pub external_id: Option<String>,
    pub team_a_score: i32,
    pub team_b_score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiBracket {
    pub tournament_uuid: String,
    pub tournament_name: String,
    pub parent_tournament_name: String,
    pub parent_tournament_format: String,
    pub circuit_name: String,
    pub start_date: String,
    pub end_date: String,
    pub index: i32,
    pub label: String,
    pub format: String,
    pub number_of_teams: Option<i32>,
    pub matches: Vec<ApiBracketMatch>,
}

/// A match from the brackets endpoint, with explicit status flags and
/// winner/loser destinations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiBracketMatch {
    pub uuid: String,
    #[serde(rename = "type")]
    pub match_type: String,
    pub index: i32,
    pub name: String,
    pub time_of_series: String,
    pub team_a: ApiBracketTeam,
    pub team_b: ApiBracketTeam,
    pub team_a_score: i32,
    pub team_b_score: i32,
    pub maps: Vec<ApiBracketMap>,
    pub external_id: Option<String>,
    pub winner_goes_to: Option<ApiBracketDestination>,
    pub loser_goes_to: Option<ApiBracketDestination>,
    pub is_live: bool,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiBracketTeam {
    pub uuid: String,
    pub name: String,
    pub shorthand: String,
    pub location: String,
    pub is_eliminated: bool,
}

/// A single map (game) from the brackets endpoint. All three timestamps
/// are populated for bracket matches.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiBracketMap {
    pub uuid: String,
    pub scheduled_start_time: String,
    pub actual_start_time: String,
    pub name: String,
    pub match_ended_time: String,
    pub team_a_score: i32,
    pub team_b_score: i32,
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiBracketDestination {
    #[serde(rename = "tournamentUUID")]
    pub tournament_uuid: String,
    #[serde(rename = "seriesUUID")]
    pub series_uuid: String,
    #[serde(rename = "bracketPosition")]
    pub bracket_position: String,
}
