use super::{parse_optional_timestamp, parse_timestamp};
use crate::data_fetcher::models::{ApiMatch, ApiMatchMap, ApiMatchTeam};
use crate::domain::{Match, MatchMap, MatchTeam};
use crate::error::AppError;

/// Converts a batch of matches-endpoint responses in order; the first
/// failing element aborts the whole batch.
pub fn matches_from_listing(api_matches: &[ApiMatch]) -> Result<Vec<Match>, AppError> {
    api_matches.iter().map(match_from_listing).collect()
}

/// Converts one matches-endpoint match into the domain model.
///
/// This wire shape carries no live/completed flags, so status is inferred
/// from the per-map timestamps. Bracket destinations do not exist on this
/// endpoint either.
pub fn match_from_listing(api: &ApiMatch) -> Result<Match, AppError> {
    let entity = format!("match {}", api.id);
    let time_of_series = parse_timestamp(&api.scheduled_at, "scheduled time", &entity)?;

    let maps = api
        .maps
        .iter()
        .map(map_from_listing)
        .collect::<Result<Vec<_>, _>>()?;

    let (is_completed, is_live) = infer_match_status(&api.maps);

    Ok(Match {
        id: api.id.clone(),
        match_type: api.match_type.clone(),
        index: api.index,
        name: api.name.clone(),
        time_of_series,
        team_a: listing_team(&api.team_a),
        team_b: listing_team(&api.team_b),
        team_a_score: api.team_a_score,
        team_b_score: api.team_b_score,
        maps,
        external_id: api.external_id.clone(),
        winner_goes_to: None,
        loser_goes_to: None,
        is_live,
        is_completed,
    })
}

fn listing_team(api: &ApiMatchTeam) -> MatchTeam {
    MatchTeam {
        id: api.id.clone(),
        name: api.name.clone(),
        shorthand: api.short_name.clone(),
        location: api.nationality.clone(),
        is_eliminated: false,
    }
}

/// Converts one matches-endpoint map. The scheduled time is required;
/// started/ended may be empty strings ("not set"), but a non-empty
/// unparsable value is a hard failure.
fn map_from_listing(api: &ApiMatchMap) -> Result<MatchMap, AppError> {
    let entity = format!("map {}", api.id);

    Ok(MatchMap {
        id: api.id.clone(),
        scheduled_start_time: parse_timestamp(&api.scheduled_at, "scheduled start time", &entity)?,
        actual_start_time: parse_optional_timestamp(&api.started_at, "started at time", &entity)?,
        name: api.name.clone(),
        match_ended_time: parse_optional_timestamp(&api.ended_at, "ended at time", &entity)?,
        team_a_score: api.team_a_score,
        team_b_score: api.team_b_score,
        external_id: api.external_id.clone(),
    })
}

/// Infers whether a match is completed, live or upcoming from its map
/// timestamps. Returns `(is_completed, is_live)`.
///
/// - Upcoming: no maps, or no map has started.
/// - Completed: at least one map has started and every map has both
///   started and ended.
/// - Live: at least one map has started but not every map has ended.
///
/// A map that never started falsifies `all_ended`, so a match with one
/// finished map and one untouched map counts as live, not completed.
/// That asymmetry is deliberate; see the truth-table tests below before
/// changing it.
pub fn infer_match_status(maps: &[ApiMatchMap]) -> (bool, bool) {
    if maps.is_empty() {
        return (false, false);
    }

    let mut has_started = false;
    let mut all_ended = true;

    for map in maps {
        if !map.started_at.is_empty() {
            has_started = true;
            if map.ended_at.is_empty() {
                all_ended = false;
            }
        } else {
            all_ended = false;
        }
    }

    if !has_started {
        return (false, false); // Upcoming
    }

    if all_ended {
        return (true, false); // Completed
    }

    (false, true) // Live
}
