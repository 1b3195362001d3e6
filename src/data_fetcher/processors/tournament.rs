use super::parse_date;
use crate::data_fetcher::models::ApiTournament;
use crate::domain::{Region, Tournament, TournamentType};
use crate::error::AppError;

/// Converts an API tournament into the domain model.
///
/// Both dates must parse in `YYYY-MM-DD` format; a failure aborts the
/// conversion with an error naming the failing field and tournament id.
pub fn tournament_to_domain(api: &ApiTournament) -> Result<Tournament, AppError> {
    let entity = format!("tournament {}", api.id);
    let start_date = parse_date(&api.start_date, "start date", &entity)?;
    let end_date = parse_date(&api.end_date, "end date", &entity)?;

    // A major carries neither region nor grouping on the wire.
    let is_major = api.region.is_empty() && api.grouping.is_empty();

    Ok(Tournament {
        id: api.id.clone(),
        name: api.name.clone(),
        start_date,
        end_date,
        circuit_id: api.circuit_id.clone(),
        prize_pool: api.prize_pool.clone(),
        location: api.location.clone(),
        team_count: api.number_of_teams.unwrap_or(0),
        region: parse_region(&api.region),
        tournament_type: classify_tournament(&api.name, &api.grouping, &api.region),
        description: api.description.clone(),
        is_online: api.location == "Online",
        is_major,
    })
}

/// Converts a batch of API tournaments in order; the first failing element
/// aborts the whole batch.
pub fn tournaments_to_domain(api_tournaments: &[ApiTournament]) -> Result<Vec<Tournament>, AppError> {
    api_tournaments.iter().map(tournament_to_domain).collect()
}

/// Converts an API region string into the domain enum. Case-insensitive
/// and total: anything unrecognized (including the empty string) maps to
/// `Region::None`.
pub fn parse_region(region: &str) -> Region {
    match region.to_ascii_uppercase().as_str() {
        "NA" => Region::NA,
        "EU" => Region::EU,
        "APAC" => Region::APAC,
        "SAM" => Region::SAM,
        "OCE" => Region::OCE,
        "MENA" => Region::MENA,
        "SSA" => Region::SSA,
        _ => Region::None,
    }
}

/// Determines the tournament tier from its name, grouping and region.
///
/// Name-based classes win over the region/grouping check; everything else
/// is an Open.
pub fn classify_tournament(name: &str, grouping: &str, region: &str) -> TournamentType {
    let lower_name = name.to_lowercase();

    if lower_name.contains("world championship") {
        return TournamentType::WorldChampionship;
    }
    if lower_name.contains("kick-off") || lower_name.contains("kickoff") {
        return TournamentType::Kickoff;
    }
    if region.is_empty() && grouping.is_empty() {
        return TournamentType::Major;
    }

    TournamentType::Open
}
