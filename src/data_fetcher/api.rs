//! HTTP transport for the BLAST v2 API
//!
//! One request per call, no retries, no caching: a command performs its
//! fetches sequentially and any failure aborts the whole command. Errors
//! are classified by status code so the command layer can tell "not found"
//! apart from transport trouble.

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::data_fetcher::models::{ApiBracket, ApiMatch, ApiTournament};
use crate::error::AppError;

/// Creates the HTTP client used for all requests, with a fixed per-request
/// timeout.
pub fn create_http_client(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
}

/// Builds the URL listing all tournaments of a circuit.
///
/// # Example
/// ```
/// use rlcs_cli::data_fetcher::api::tournaments_url;
///
/// let url = tournaments_url("https://api.example.com", "2026");
/// assert_eq!(url, "https://api.example.com/circuits/2026/tournaments?game=rl");
/// ```
pub fn tournaments_url(base: &str, circuit: &str) -> String {
    format!("{base}/circuits/{circuit}/tournaments?game=rl")
}

/// Builds the URL listing all matches of a tournament.
///
/// # Example
/// ```
/// use rlcs_cli::data_fetcher::api::tournament_matches_url;
///
/// let url = tournament_matches_url("https://api.example.com", "t-1");
/// assert_eq!(url, "https://api.example.com/games/rl/tournaments/t-1/matches");
/// ```
pub fn tournament_matches_url(base: &str, tournament_id: &str) -> String {
    format!("{base}/games/rl/tournaments/{tournament_id}/matches")
}

/// Builds the URL listing all brackets of a tournament.
pub fn tournament_brackets_url(base: &str, tournament_id: &str) -> String {
    format!("{base}/games/rl/tournaments/{tournament_id}/brackets")
}

/// Builds the URL for detailed data on a single match.
pub fn match_detail_url(base: &str, match_id: &str) -> String {
    format!("{base}/matches/{match_id}/detailed")
}

/// Fetches and deserializes one JSON resource.
async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {url}: {e}");
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {status_code} - {reason} (URL: {url})");

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response body from URL {url}: {e}");
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {e} (URL: {url})");

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Fetches all tournaments of a circuit.
pub async fn fetch_tournaments(
    client: &Client,
    base: &str,
    circuit: &str,
) -> Result<Vec<ApiTournament>, AppError> {
    let url = tournaments_url(base, circuit);
    fetch(client, &url).await
}

/// Fetches all matches of a tournament. A 404 surfaces as
/// [`AppError::TournamentNotFound`] so the CLI can report it as such.
pub async fn fetch_tournament_matches(
    client: &Client,
    base: &str,
    tournament_id: &str,
) -> Result<Vec<ApiMatch>, AppError> {
    let url = tournament_matches_url(base, tournament_id);
    fetch(client, &url).await.map_err(|e| match e {
        AppError::ApiNotFound { .. } => AppError::tournament_not_found(tournament_id),
        other => other,
    })
}

/// Fetches all brackets of a tournament. A 404 surfaces as
/// [`AppError::TournamentNotFound`].
pub async fn fetch_tournament_brackets(
    client: &Client,
    base: &str,
    tournament_id: &str,
) -> Result<Vec<ApiBracket>, AppError> {
    let url = tournament_brackets_url(base, tournament_id);
    fetch(client, &url).await.map_err(|e| match e {
        AppError::ApiNotFound { .. } => AppError::tournament_not_found(tournament_id),
        other => other,
    })
}

/// Fetches detailed data for one match. A 404 surfaces as
/// [`AppError::MatchNotFound`].
pub async fn fetch_match_detail(
    client: &Client,
    base: &str,
    match_id: &str,
) -> Result<ApiMatch, AppError> {
    let url = match_detail_url(base, match_id);
    fetch(client, &url).await.map_err(|e| match e {
        AppError::ApiNotFound { .. } => AppError::match_not_found(match_id),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_builders() {
        assert_eq!(
            tournaments_url("https://api.blast.tv/v2", "2026"),
            "https://api.blast.tv/v2/circuits/2026/tournaments?game=rl"
        );
        assert_eq!(
            tournament_matches_url("https://api.blast.tv/v2", "abc"),
            "https://api.blast.tv/v2/games/rl/tournaments/abc/matches"
        );
        assert_eq!(
            tournament_brackets_url("https://api.blast.tv/v2", "abc"),
            "https://api.blast.tv/v2/games/rl/tournaments/abc/brackets"
        );
        assert_eq!(
            match_detail_url("https://api.blast.tv/v2", "m-9"),
            "https://api.blast.tv/v2/matches/m-9/detailed"
        );
    }
}
