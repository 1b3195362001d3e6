use std::io::Write;

use clap::Args;
use reqwest::Client;
use tracing::{debug, info};

use crate::data_fetcher::api::fetch_tournament_brackets;
use crate::data_fetcher::processors::brackets_to_domain;
use crate::domain::Bracket;
use crate::error::AppError;
use crate::filters::{MatchFilter, StatusFilter, TeamNameScope};
use crate::output::{Format, render_brackets};

/// Shows the brackets of a tournament with their matches.
#[derive(Debug, Args)]
pub struct TournamentsBracketsArgs {
    /// Tournament ID (UUID)
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

    /// Filter by team name (case-insensitive partial match)
    #[arg(long, help_heading = "Filters")]
    pub team: Option<String>,

    /// Filter by match type (e.g. BO5, BO7)
    #[arg(long, help_heading = "Filters")]
    pub match_type: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub output: Format,
}

impl TournamentsBracketsArgs {
    pub async fn run(
        &self,
        client: &Client,
        base_url: &str,
        w: &mut impl Write,
    ) -> Result<(), AppError> {
        let status =
            StatusFilter::from_flags(self.completed_only, self.live_only, self.upcoming_only)?;
        // Bracket team filtering matches names only, not shorthands.
        let filter = MatchFilter {
            status,
            team: self.team.clone(),
            match_type: self.match_type.clone(),
            team_scope: TeamNameScope::NameOnly,
        };

        info!("Fetching brackets for tournament {}", self.tournament_id);
        let raw = fetch_tournament_brackets(client, base_url, &self.tournament_id).await?;
        let mut brackets = brackets_to_domain(&raw)?;

        if !filter.is_empty() {
            brackets = filter_brackets(brackets, &filter);
            debug!("{} brackets remain after filtering", brackets.len());
        }

        render_brackets(w, &brackets, self.output)
    }
}

/// Applies the match filter inside each bracket and drops brackets left
/// with no matches. Only called when at least one filter is active, so an
/// unfiltered listing keeps empty brackets visible.
fn filter_brackets(brackets: Vec<Bracket>, filter: &MatchFilter) -> Vec<Bracket> {
    brackets
        .into_iter()
        .filter_map(|mut bracket| {
            bracket.matches.retain(|m| filter.matches(m));
            if bracket.matches.is_empty() {
                None
            } else {
                Some(bracket)
            }
        })
        .collect()
}
