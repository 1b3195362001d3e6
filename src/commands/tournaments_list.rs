use std::io::Write;

use chrono::{DateTime, Utc};
use clap::Args;
use reqwest::Client;
use tracing::{debug, info};

use crate::commands::resolve_circuit;
use crate::data_fetcher::api::fetch_tournaments;
use crate::data_fetcher::processors::tournaments_to_domain;
use crate::error::AppError;
use crate::filters::TournamentFilter;
use crate::output::{TournamentFormat, render_tournaments};

/// Lists tournaments of a circuit, optionally filtered.
#[derive(Debug, Args)]
pub struct TournamentsListArgs {
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

    /// Show only upcoming tournaments (start date > today)
    #[arg(long, help_heading = "Filters")]
    pub upcoming: bool,

    /// Show only ongoing tournaments (start date <= today <= end date)
    #[arg(long, help_heading = "Filters")]
    pub ongoing: bool,

    /// Show only past tournaments (end date < today)
    #[arg(long, help_heading = "Filters")]
    pub past: bool,

    /// Minimum number of teams
    #[arg(long, default_value_t = 0, help_heading = "Filters")]
    pub min_teams: i32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = TournamentFormat::Table)]
    pub output: TournamentFormat,
}

impl TournamentsListArgs {
    fn filter(&self) -> TournamentFilter {
        TournamentFilter {
            region: self.region.clone(),
            online: self.online,
            major: self.major,
            grouping: self.grouping.clone(),
            min_teams: self.min_teams,
            upcoming: self.upcoming,
            ongoing: self.ongoing,
            past: self.past,
        }
    }

    pub async fn run(
        &self,
        client: &Client,
        base_url: &str,
        now: DateTime<Utc>,
        w: &mut impl Write,
    ) -> Result<(), AppError> {
        let filter = self.filter();
        filter.validate()?;

        let circuit = resolve_circuit(&self.circuit, now);
        info!("Listing tournaments for circuit {circuit}");

        let raw = fetch_tournaments(client, base_url, &circuit).await?;
        let tournaments = tournaments_to_domain(&raw)?;

        let today = now.date_naive();
        let filtered: Vec<_> = tournaments
            .into_iter()
            .filter(|t| filter.matches(t, today))
            .collect();
        debug!("{} of {} tournaments pass the filters", filtered.len(), raw.len());

        render_tournaments(w, &filtered, self.output)
    }
}
