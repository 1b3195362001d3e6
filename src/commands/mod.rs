//! Command implementations behind the CLI surface
//!
//! Each command validates its flags before touching the network, performs
//! its fetches sequentially, runs the mapped data through the filter and
//! sort stages, and renders to the given writer. The current time is an
//! explicit parameter so temporal behavior stays deterministic in tests.

pub mod matches_get;
pub mod matches_list;
pub mod tournaments_brackets;
pub mod tournaments_list;
pub mod tournaments_matches;

pub use matches_get::MatchesGetArgs;
pub use matches_list::MatchesListArgs;
pub use tournaments_brackets::TournamentsBracketsArgs;
pub use tournaments_list::TournamentsListArgs;
pub use tournaments_matches::TournamentsMatchesArgs;

use chrono::{DateTime, Datelike, Utc};

/// Resolves the circuit to query: the explicit flag value, or the current
/// year when the flag was left empty.
pub(crate) fn resolve_circuit(circuit: &str, now: DateTime<Utc>) -> String {
    if circuit.is_empty() {
        now.year().to_string()
    } else {
        circuit.to_string()
    }
}
