//! Domain model for RLCS tournaments, brackets and matches
//!
//! Plain value objects, independent of the wire format. They are built
//! once per mapping pass by `data_fetcher::processors` and never mutated
//! afterwards; the filter stage builds new collections instead.

pub mod bracket;
pub mod game_listing;
pub mod series;
pub mod tournament;

pub use bracket::Bracket;
pub use game_listing::GameListing;
pub use series::{BracketDestination, Match, MatchMap, MatchTeam};
pub use tournament::{Region, Tournament, TournamentType};
