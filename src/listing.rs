//! Cross-tournament game aggregation: ordering, default status admission
//! and result limiting for the games view.

use crate::domain::GameListing;
use crate::error::AppError;
use crate::filters::StatusFilter;

/// Sorts game listings in presentation order: live first, then upcoming,
/// then completed; within a status by series time, then tournament name,
/// then match name. The sort is total, so the output order is stable
/// across runs on equal input.
pub fn sort_game_listings(listings: &mut [GameListing]) {
    listings.sort_by(|a, b| {
        a.series
            .status_rank()
            .cmp(&b.series.status_rank())
            .then_with(|| a.series.time_of_series.cmp(&b.series.time_of_series))
            .then_with(|| a.tournament_name.cmp(&b.tournament_name))
            .then_with(|| a.series.name.cmp(&b.series.name))
    });
}

/// Whether the aggregated games view admits a listing under the given
/// status filter. With no explicit filter the view shows live and
/// upcoming matches but hides completed ones.
pub fn admits_listing(status: StatusFilter, listing: &GameListing) -> bool {
    match status {
        StatusFilter::Any => {
            listing.series.is_live || (!listing.series.is_live && !listing.series.is_completed)
        }
        other => other.matches(&listing.series),
    }
}

/// Validates the `--limit` flag. Zero means unlimited; negative values are
/// a configuration error.
pub fn validate_limit(limit: i64) -> Result<(), AppError> {
    if limit < 0 {
        return Err(AppError::config_error("--limit cannot be negative"));
    }
    Ok(())
}

/// Truncates the listing to at most `limit` entries. Zero leaves it
/// untouched.
pub fn apply_limit(listings: &mut Vec<GameListing>, limit: i64) {
    if limit > 0 {
        listings.truncate(limit as usize);
    }
}
