use std::io::Write;

use chrono::{DateTime, Utc};
use clap::Args;
use reqwest::Client;
use tracing::{debug, info};

use crate::commands::resolve_circuit;
use crate::data_fetcher::api::{fetch_tournament_matches, fetch_tournaments};
use crate::data_fetcher::processors::{matches_from_listing, tournaments_to_domain};
use crate::domain::GameListing;
use crate::error::AppError;
use crate::filters::{StatusFilter, TournamentFilter};
use crate::listing::{admits_listing, apply_limit, sort_game_listings, validate_limit};
use crate::output::{Format, render_games};

/// Lists matches across all tournaments of a circuit, live first. Without
/// an explicit status filter, completed matches are hidden.
#[derive(Debug, Args)]
pub struct TournamentsMatchesArgs {
    /// Circuit/year to fetch tournaments from (e.g. 2025, 2026); defaults
    /// to the current year
    #[arg(long, default_value = "")]
    pub circuit: String,

    /// Filter by region (NA, EU, APAC, SAM, OCE, MENA, SSA)
    #[arg(long, help_heading = "Filters")]
    pub region: Option<String>,

    /// Show only online tournaments
    #[arg(long, help_heading = "Filters")]
    pub online: bool,

    /// Show only major tournaments (empty region/grouping)
    #[arg(long, help_heading = "Filters")]
    pub major: bool,

    /// Filter by tournament grouping (e.g. 'RLCS Open 1 2026')
    #[arg(long, help_heading = "Filters")]
    pub grouping: Option<String>,

    /// Minimum number of teams
    #[arg(long, default_value_t = 0, help_heading = "Filters")]
    pub min_teams: i32,

    /// Show only live matches
    #[arg(long, help_heading = "Filters")]
    pub live_only: bool,

    /// Show only upcoming matches
    #[arg(long, help_heading = "Filters")]
    pub upcoming_only: bool,

    /// Show only completed matches
    #[arg(long, help_heading = "Filters")]
    pub completed_only: bool,

    /// Maximum number of matches to return after filtering (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    pub limit: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub output: Format,
}

impl TournamentsMatchesArgs {
    fn tournament_filter(&self) -> TournamentFilter {
        // Temporal flags stay off here; the aggregation view filters
        // tournaments by attributes only.
        TournamentFilter {
            region: self.region.clone(),
            online: self.online,
            major: self.major,
            grouping: self.grouping.clone(),
            min_teams: self.min_teams,
            ..TournamentFilter::default()
        }
    }

    pub async fn run(
        &self,
        client: &Client,
        base_url: &str,
        now: DateTime<Utc>,
        w: &mut impl Write,
    ) -> Result<(), AppError> {
        // All flag validation happens before the first network call.
        let status =
            StatusFilter::from_flags(self.completed_only, self.live_only, self.upcoming_only)?;
        validate_limit(self.limit)?;

        let circuit = resolve_circuit(&self.circuit, now);
        info!("Aggregating matches across circuit {circuit}");

        let raw_tournaments = fetch_tournaments(client, base_url, &circuit).await?;
        let tournaments = tournaments_to_domain(&raw_tournaments)?;

        let filter = self.tournament_filter();
        let today = now.date_naive();
        let tournaments: Vec<_> = tournaments
            .into_iter()
            .filter(|t| filter.matches(t, today))
            .collect();
        debug!("{} tournaments pass the filters", tournaments.len());

        let mut games = Vec::new();
        for tournament in &tournaments {
            let raw_matches = fetch_tournament_matches(client, base_url, &tournament.id).await?;
            let matches = matches_from_listing(&raw_matches)?;

            for series in matches {
                let listing = GameListing {
                    tournament_id: tournament.id.clone(),
                    tournament_name: tournament.name.clone(),
                    series,
                };
                if admits_listing(status, &listing) {
                    games.push(listing);
                }
            }
        }

        sort_game_listings(&mut games);
        apply_limit(&mut games, self.limit);
        debug!("{} games after sorting and limiting", games.len());

        render_games(w, &games, self.output)
    }
}
