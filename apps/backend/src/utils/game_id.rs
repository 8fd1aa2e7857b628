//! Game id generation.
//!
//! Ids are UTC wall-clock timestamps in `YYYYMMDD-HHMMSS` form, matching
//! the image and job naming scheme the client expects. Second granularity
//! means two games created within the same second collide; the store
//! surfaces that as a conflict rather than overwriting (see
//! `GameStore::create`).

use time::macros::format_description;
use time::OffsetDateTime;

/// Generate a game id for the current instant.
pub fn generate() -> String {
    from_datetime(OffsetDateTime::now_utc())
}

fn from_datetime(at: OffsetDateTime) -> String {
    let format = format_description!("[year][month][day]-[hour][minute][second]");
    at.format(&format)
        // A const format description over date+time components cannot fail
        // to format; fall back to the raw timestamp anyway.
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}
