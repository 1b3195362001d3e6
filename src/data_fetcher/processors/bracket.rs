use super::parse_timestamp;
use crate::data_fetcher::models::{
    ApiBracket, ApiBracketDestination, ApiBracketMap, ApiBracketMatch, ApiBracketTeam,
};
use crate::domain::{Bracket, BracketDestination, Match, MatchMap, MatchTeam};
use crate::error::AppError;

/// Converts a batch of bracket responses in order; the first failing
/// element aborts the whole batch.
pub fn brackets_to_domain(api_brackets: &[ApiBracket]) -> Result<Vec<Bracket>, AppError> {
    api_brackets.iter().map(bracket_to_domain).collect()
}

/// Converts one API bracket into the domain model. Bracket start/end dates
/// use the full timestamp format, not the calendar-date one.
pub fn bracket_to_domain(api: &ApiBracket) -> Result<Bracket, AppError> {
    let entity = format!("bracket {}", api.tournament_uuid);
    let start_date = parse_timestamp(&api.start_date, "start date", &entity)?;
    let end_date = parse_timestamp(&api.end_date, "end date", &entity)?;

    let matches = api
        .matches
        .iter()
        .map(bracket_match_to_domain)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Bracket {
        tournament_id: api.tournament_uuid.clone(),
        tournament_name: api.tournament_name.clone(),
        parent_tournament_name: api.parent_tournament_name.clone(),
        parent_tournament_format: api.parent_tournament_format.clone(),
        circuit_name: api.circuit_name.clone(),
        start_date,
        end_date,
        index: api.index,
        label: api.label.clone(),
        format: api.format.clone(),
        number_of_teams: api.number_of_teams,
        matches,
    })
}

/// Converts one brackets-endpoint match into the domain model.
///
/// This wire shape carries explicit `isLive`/`isCompleted` flags and
/// bracket destinations; both pass through untouched, no inference.
pub fn bracket_match_to_domain(api: &ApiBracketMatch) -> Result<Match, AppError> {
    let entity = format!("match {}", api.uuid);
    let time_of_series = parse_timestamp(&api.time_of_series, "time of series", &entity)?;

    let maps = api
        .maps
        .iter()
        .map(bracket_map_to_domain)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Match {
        id: api.uuid.clone(),
        match_type: api.match_type.clone(),
        index: api.index,
        name: api.name.clone(),
        time_of_series,
        team_a: bracket_team(&api.team_a),
        team_b: bracket_team(&api.team_b),
        team_a_score: api.team_a_score,
        team_b_score: api.team_b_score,
        maps,
        external_id: api.external_id.clone(),
        winner_goes_to: api.winner_goes_to.as_ref().map(destination),
        loser_goes_to: api.loser_goes_to.as_ref().map(destination),
        is_live: api.is_live,
        is_completed: api.is_completed,
    })
}

fn bracket_team(api: &ApiBracketTeam) -> MatchTeam {
    MatchTeam {
        id: api.uuid.clone(),
        name: api.name.clone(),
        shorthand: api.shorthand.clone(),
        location: api.location.clone(),
        is_eliminated: api.is_eliminated,
    }
}

fn destination(api: &ApiBracketDestination) -> BracketDestination {
    BracketDestination {
        tournament_id: api.tournament_uuid.clone(),
        series_id: api.series_uuid.clone(),
        bracket_position: api.bracket_position.clone(),
    }
}

/// Converts one brackets-endpoint map. All three timestamps are required
/// on this endpoint; an empty string is a parse failure here.
fn bracket_map_to_domain(api: &ApiBracketMap) -> Result<MatchMap, AppError> {
    let entity = format!("map {}", api.uuid);

    Ok(MatchMap {
        id: api.uuid.clone(),
        scheduled_start_time: parse_timestamp(
            &api.scheduled_start_time,
            "scheduled start time",
            &entity,
        )?,
        actual_start_time: Some(parse_timestamp(
            &api.actual_start_time,
            "actual start time",
            &entity,
        )?),
        name: api.name.clone(),
        match_ended_time: Some(parse_timestamp(
            &api.match_ended_time,
            "match ended time",
            &entity,
        )?),
        team_a_score: api.team_a_score,
        team_b_score: api.team_b_score,
        external_id: api.external_id.clone(),
    })
}
