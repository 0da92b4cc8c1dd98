use chrono::{DateTime, SecondsFormat, Utc};

/// Converts a Slack `ts` ("seconds.micros") into an ISO-8601 UTC string with
/// millisecond precision, e.g. `2023-11-14T22:13:20.123Z`.
///
/// Returns `None` when `ts` is not a finite number or is out of range.
#[must_use]
pub fn slack_ts_to_iso8601(ts: &str) -> Option<String> {
    let seconds: f64 = ts.trim().parse().ok()?;
    if !seconds.is_finite() {
        return None;
    }

    #[allow(clippy::cast_possible_truncation)]
    let millis = (seconds * 1000.0).trunc() as i64;
    let datetime: DateTime<Utc> = DateTime::from_timestamp_millis(millis)?;

    Some(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
}
