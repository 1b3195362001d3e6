//! Filter predicates for matches and tournaments
//!
//! Filters are plain data plus pure predicates. Commands build a filter
//! from CLI flags, validate it once, then apply it over already-fetched
//! collections; nothing here performs I/O or reads the clock.

use chrono::NaiveDate;

use crate::domain::{Match, Tournament};
use crate::error::AppError;

/// Which match statuses a listing admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No status restriction.
    #[default]
    Any,
    CompletedOnly,
    LiveOnly,
    UpcomingOnly,
}

impl StatusFilter {
    /// Builds a status filter from the three CLI flags. At most one may be
    /// set; combining them is a configuration error.
    pub fn from_flags(completed: bool, live: bool, upcoming: bool) -> Result<Self, AppError> {
        let set = [completed, live, upcoming].iter().filter(|f| **f).count();
        if set > 1 {
            return Err(AppError::config_error(
                "cannot use multiple status filters together (completed-only, live-only and upcoming-only are mutually exclusive)",
            ));
        }
        Ok(if completed {
            StatusFilter::CompletedOnly
        } else if live {
            StatusFilter::LiveOnly
        } else if upcoming {
            StatusFilter::UpcomingOnly
        } else {
            StatusFilter::Any
        })
    }

    pub fn matches(&self, m: &Match) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::CompletedOnly => m.is_completed,
            StatusFilter::LiveOnly => m.is_live,
            StatusFilter::UpcomingOnly => !m.is_live && !m.is_completed,
        }
    }
}

/// Where a team query string is allowed to match.
///
/// Match listings search both the team name and its shorthand; bracket
/// listings search the name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamNameScope {
    #[default]
    NameOnly,
    NameOrShorthand,
}

/// Combined filter for match listings.
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub status: StatusFilter,
    pub team: Option<String>,
    pub match_type: Option<String>,
    pub team_scope: TeamNameScope,
}

impl MatchFilter {
    /// True when no criterion is active, so a listing can skip filtering
    /// entirely.
    pub fn is_empty(&self) -> bool {
        self.status == StatusFilter::Any && self.team.is_none() && self.match_type.is_none()
    }

    pub fn matches(&self, m: &Match) -> bool {
        if !self.status.matches(m) {
            return false;
        }

        // An empty query string means the filter was not really given.
        if let Some(team) = self.team.as_deref().filter(|t| !t.is_empty()) {
            let query = team.to_lowercase();
            let name_hit = m.team_a.name.to_lowercase().contains(&query)
                || m.team_b.name.to_lowercase().contains(&query);
            let hit = match self.team_scope {
                TeamNameScope::NameOnly => name_hit,
                TeamNameScope::NameOrShorthand => {
                    name_hit
                        || m.team_a.shorthand.to_lowercase().contains(&query)
                        || m.team_b.shorthand.to_lowercase().contains(&query)
                }
            };
            if !hit {
                return false;
            }
        }

        if let Some(match_type) = self.match_type.as_deref().filter(|t| !t.is_empty())
            && !m.match_type.eq_ignore_ascii_case(match_type)
        {
            return false;
        }

        true
    }
}

/// Combined filter for tournament listings.
#[derive(Debug, Clone, Default)]
pub struct TournamentFilter {
    pub region: Option<String>,
    pub online: bool,
    pub major: bool,
    pub grouping: Option<String>,
    pub min_teams: i32,
    pub upcoming: bool,
    pub ongoing: bool,
    pub past: bool,
}

impl TournamentFilter {
    /// Rejects flag combinations that can never match anything.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.upcoming && self.past {
            return Err(AppError::config_error(
                "--upcoming and --past cannot be combined",
            ));
        }
        Ok(())
    }

    pub fn matches(&self, t: &Tournament, today: NaiveDate) -> bool {
        // Contradictory temporal flags admit nothing, even though the
        // command layer already rejects the combination.
        if self.upcoming && self.past {
            return false;
        }

        if let Some(region) = self.region.as_deref().filter(|r| !r.is_empty())
            && !t.region.as_str().eq_ignore_ascii_case(region)
        {
            return false;
        }

        if self.online && !t.is_online {
            return false;
        }

        if self.major && !t.is_major {
            return false;
        }

        // Grouping filters on the tournament name, case-sensitively.
        if let Some(grouping) = &self.grouping
            && !t.name.contains(grouping.as_str())
        {
            return false;
        }

        if self.min_teams > 0 && t.team_count < self.min_teams {
            return false;
        }

        if self.upcoming && !t.is_upcoming(today) {
            return false;
        }
        if self.ongoing && !t.is_ongoing(today) {
            return false;
        }
        if self.past && !t.is_past(today) {
            return false;
        }

        true
    }
}
