use chrono::{DateTime, ParseError};
use thiserror::Error;

/// Wire format of Jira timestamps, e.g. `2020-12-13T14:05:20.974+0100`.
pub const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3f%z";

/// Length of `YYYY-MM-DDTHH:MM:SS.mmm+HHMM`.
const JIRA_TIMESTAMP_LEN: usize = 28;
const OFFSET_SIGN_INDEX: usize = 23;

#[derive(Error, Debug)]
pub enum TimestampError {
    /// `%z` alone also takes `+01:00`, so the layout is checked first.
    #[error("expected YYYY-MM-DDTHH:MM:SS.mmm+HHMM")]
    Shape,
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Format used when displaying timestamps in tables.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reformat a Jira timestamp for display.
///
/// The wall-clock digits are kept as written in the source string. The
/// milliseconds are truncated and the UTC offset is dropped without being
/// applied, so `2020-12-13T14:05:20.974+0100` becomes `2020-12-13 14:05:20`.
pub fn format_date_time(value: &str) -> Result<String, TimestampError> {
    let bytes = value.as_bytes();
    if bytes.len() != JIRA_TIMESTAMP_LEN || !matches!(bytes[OFFSET_SIGN_INDEX], b'+' | b'-') {
        return Err(TimestampError::Shape);
    }
    let parsed = DateTime::parse_from_str(value, JIRA_TIMESTAMP_FORMAT)?;
    Ok(parsed.naive_local().format(DISPLAY_FORMAT).to_string())
}
