//! Fetching and mapping BLAST API data
//!
//! `api` talks HTTP, `models` mirrors the wire JSON, and `processors`
//! turns wire models into domain models. Commands compose the three.

pub mod api;
pub mod models;
pub mod processors;

pub use api::{
    create_http_client, fetch_match_detail, fetch_tournament_brackets, fetch_tournament_matches,
    fetch_tournaments,
};
pub use processors::{brackets_to_domain, matches_from_listing, tournaments_to_domain};
