use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Geographical region of a tournament. Majors and world championships
/// carry no region on the wire and map to `Region::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    NA,
    EU,
    APAC,
    SAM,
    OCE,
    MENA,
    SSA,
    #[serde(rename = "")]
    None,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NA => "NA",
            Region::EU => "EU",
            Region::APAC => "APAC",
            Region::SAM => "SAM",
            Region::OCE => "OCE",
            Region::MENA => "MENA",
            Region::SSA => "SSA",
            Region::None => "",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tournament tier derived from the source payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TournamentType {
    Open,
    Major,
    WorldChampionship,
    Kickoff,
}

impl TournamentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentType::Open => "Open",
            TournamentType::Major => "Major",
            TournamentType::WorldChampionship => "WorldChampionship",
            TournamentType::Kickoff => "Kickoff",
        }
    }
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model for an RLCS tournament.
///
/// Start/end are calendar dates without a time of day. `start_date <=
/// end_date` is assumed but not enforced; downstream logic must not rely
/// on it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub circuit_id: String,
    pub prize_pool: String,
    pub location: String,
    pub team_count: i32,
    pub region: Region,
    #[serde(rename = "type")]
    pub tournament_type: TournamentType,
    pub description: String,
    pub is_online: bool,
    pub is_major: bool,
}

impl Tournament {
    /// Returns true if the tournament hasn't started yet.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.start_date > today
    }

    /// Returns true if the tournament is currently running.
    pub fn is_ongoing(&self, today: NaiveDate) -> bool {
        self.start_date <= today && today <= self.end_date
    }

    /// Returns true if the tournament has ended.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.end_date < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tournament(start: &str, end: &str) -> Tournament {
        Tournament {
            id: "t-1".to_string(),
            name: "RLCS Open 1".to_string(),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            circuit_id: "2026".to_string(),
            prize_pool: "$100,000".to_string(),
            location: "Online".to_string(),
            team_count: 16,
            region: Region::EU,
            tournament_type: TournamentType::Open,
            description: String::new(),
            is_online: true,
            is_major: false,
        }
    }

    #[test]
    fn test_temporal_helpers() {
        let t = tournament("2026-01-05", "2026-01-12");

        let before: NaiveDate = "2026-01-04".parse().unwrap();
        let first_day: NaiveDate = "2026-01-05".parse().unwrap();
        let during: NaiveDate = "2026-01-08".parse().unwrap();
        let last_day: NaiveDate = "2026-01-12".parse().unwrap();
        let after: NaiveDate = "2026-01-13".parse().unwrap();

        assert!(t.is_upcoming(before));
        assert!(!t.is_upcoming(first_day));

        assert!(!t.is_ongoing(before));
        assert!(t.is_ongoing(first_day));
        assert!(t.is_ongoing(during));
        assert!(t.is_ongoing(last_day));
        assert!(!t.is_ongoing(after));

        assert!(!t.is_past(last_day));
        assert!(t.is_past(after));
    }

    #[test]
    fn test_region_display() {
        assert_eq!(Region::APAC.to_string(), "APAC");
        assert_eq!(Region::None.to_string(), "");
    }

    #[test]
    fn test_tournament_serializes_with_wire_field_names() {
        let t = tournament("2026-01-05", "2026-01-12");
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"startDate\":\"2026-01-05\""));
        assert!(json.contains("\"type\":\"Open\""));
        assert!(json.contains("\"isOnline\":true"));
        assert!(json.contains("\"region\":\"EU\""));
    }
}
