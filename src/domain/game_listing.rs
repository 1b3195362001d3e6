use super::series::Match;
use serde::Serialize;

/// A match annotated with the tournament it belongs to, used by the
/// cross-tournament listing view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameListing {
    pub tournament_id: String,
    pub tournament_name: String,
    #[serde(rename = "match")]
    pub series: Match,
}
