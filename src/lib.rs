//! RLCS Command Line Client Library
//!
//! This library fetches Rocket League Championship Series tournament,
//! match and bracket data from the BLAST API, maps it into a domain
//! model, and renders it as tables, JSON, YAML or CSV.
//!
//! # Examples
//!
//! ```rust,no_run
//! use rlcs_cli::constants::{API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS};
//! use rlcs_cli::data_fetcher::api::{create_http_client, fetch_tournaments};
//! use rlcs_cli::data_fetcher::processors::tournaments_to_domain;
//! use rlcs_cli::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = create_http_client(DEFAULT_HTTP_TIMEOUT_SECONDS)?;
//!     let raw = fetch_tournaments(&client, API_BASE_URL, "2026").await?;
//!     let tournaments = tournaments_to_domain(&raw)?;
//!
//!     for tournament in &tournaments {
//!         println!("{} ({})", tournament.name, tournament.region);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod constants;
pub mod data_fetcher;
pub mod domain;
pub mod error;
pub mod filters;
pub mod listing;
pub mod output;

// Re-export commonly used types for convenience
pub use cli::Cli;
pub use data_fetcher::api::create_http_client;
pub use domain::{Bracket, GameListing, Match, Region, Tournament, TournamentType};
pub use error::AppError;
