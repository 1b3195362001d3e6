//! Application-wide constants
//!
//! This module centralizes the API endpoint configuration and the wire
//! formats the BLAST API uses, so they are defined in exactly one place.

/// Base URL for the BLAST v2 API
pub const API_BASE_URL: &str = "https://api.blast.tv/v2";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Wire format for calendar dates (tournament start/end), e.g. `2026-01-05`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for timestamps with millisecond precision and a literal `Z`
/// suffix, e.g. `2026-01-05T17:00:00.000Z`. The API never sends an offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
