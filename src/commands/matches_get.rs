use std::io::Write;

use clap::Args;
use reqwest::Client;
use tracing::info;

use crate::data_fetcher::api::fetch_match_detail;
use crate::data_fetcher::processors::match_from_listing;
use crate::error::AppError;
use crate::output::{Format, render_matches};

/// Shows detailed information for one match.
#[derive(Debug, Args)]
pub struct MatchesGetArgs {
    /// Match ID
    pub match_id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub output: Format,
}

impl MatchesGetArgs {
    pub async fn run(
        &self,
        client: &Client,
        base_url: &str,
        w: &mut impl Write,
    ) -> Result<(), AppError> {
        info!("Fetching match {}", self.match_id);
        let raw = fetch_match_detail(client, base_url, &self.match_id).await?;
        let m = match_from_listing(&raw)?;

        // The renderers work on slices, so a single match goes in as one.
        render_matches(w, std::slice::from_ref(&m), self.output)
    }
}
