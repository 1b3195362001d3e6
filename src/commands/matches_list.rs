use std::io::Write;

use clap::Args;
use reqwest::Client;
use tracing::{debug, info};

use crate::data_fetcher::api::fetch_tournament_matches;
use crate::data_fetcher::processors::matches_from_listing;
use crate::error::AppError;
use crate::filters::{MatchFilter, StatusFilter, TeamNameScope};
use crate::output::{Format, render_matches};

/// Lists all matches of one tournament.
#[derive(Debug, Args)]
pub struct MatchesListArgs {
    /// Tournament ID
    pub tournament_id: String,

    /// Show only completed matches
    #[arg(long, help_heading = "Filters")]
    pub completed_only: bool,

    /// Show only live matches
    #[arg(long, help_heading = "Filters")]
    pub live_only: bool,

    /// Show only upcoming matches
    #[arg(long, help_heading = "Filters")]
    pub upcoming_only: bool,

    /// Filter by team name or shorthand (case-insensitive partial match)
    #[arg(long, help_heading = "Filters")]
    pub team: Option<String>,

    /// Filter by match type (e.g. BO5, BO7)
    #[arg(long, help_heading = "Filters")]
    pub match_type: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub output: Format,
}

impl MatchesListArgs {
    pub async fn run(
        &self,
        client: &Client,
        base_url: &str,
        w: &mut impl Write,
    ) -> Result<(), AppError> {
        let status =
            StatusFilter::from_flags(self.completed_only, self.live_only, self.upcoming_only)?;
        let filter = MatchFilter {
            status,
            team: self.team.clone(),
            match_type: self.match_type.clone(),
            team_scope: TeamNameScope::NameOrShorthand,
        };

        info!("Listing matches for tournament {}", self.tournament_id);
        let raw = fetch_tournament_matches(client, base_url, &self.tournament_id).await?;
        let mut matches = matches_from_listing(&raw)?;

        if !filter.is_empty() {
            matches.retain(|m| filter.matches(m));
            debug!("{} of {} matches pass the filters", matches.len(), raw.len());
        }

        render_matches(w, &matches, self.output)
    }
}
