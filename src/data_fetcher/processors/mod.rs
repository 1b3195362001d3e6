//! Response mappers: wire models in, domain models out
//!
//! All conversions are pure and fallible. A batch fails on its first bad
//! element with an error naming the entity id and field; no partial
//! results are ever returned. Failures are data, not side effects - this
//! module does not log.

pub mod bracket;
pub mod matches;
pub mod tournament;

pub use bracket::{bracket_match_to_domain, bracket_to_domain, brackets_to_domain};
pub use matches::{infer_match_status, match_from_listing, matches_from_listing};
pub use tournament::{
    classify_tournament, parse_region, tournament_to_domain, tournaments_to_domain,
};

use crate::constants::{DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::error::AppError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses a calendar date in the API's `YYYY-MM-DD` format.
pub(crate) fn parse_date(value: &str, field: &str, entity: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        AppError::datetime_parse_error(format!("failed to parse {field} for {entity}: {e}"))
    })
}

/// Parses a timestamp in the API's `YYYY-MM-DDTHH:MM:SS.sssZ` format.
/// The suffix is a literal `Z`; offsets are not supported.
///
/// Exactly three fractional digits are required. chrono's `%.3f` treats
/// the fraction as optional when parsing, so the parsed value is checked
/// against its canonical rendering to reject laxer inputs.
pub(crate) fn parse_timestamp(
    value: &str,
    field: &str,
    entity: &str,
) -> Result<DateTime<Utc>, AppError> {
    let naive = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| {
        AppError::datetime_parse_error(format!("failed to parse {field} for {entity}: {e}"))
    })?;
    if naive.format(TIMESTAMP_FORMAT).to_string() != value {
        return Err(AppError::datetime_parse_error(format!(
            "failed to parse {field} for {entity}: expected millisecond precision and a literal Z"
        )));
    }
    Ok(naive.and_utc())
}

/// Like [`parse_timestamp`] but treats an empty string as "not set".
/// A non-empty unparsable value is still a hard failure.
pub(crate) fn parse_optional_timestamp(
    value: &str,
    field: &str,
    entity: &str,
) -> Result<Option<DateTime<Utc>>, AppError> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse_timestamp(value, field, entity).map(Some)
    }
}
