use tracing::warn;

use crate::core::models::RawMessage;
use crate::slack::client::HistoryRecord;
use crate::utils::timestamps::slack_ts_to_iso8601;

/// Record type Slack uses for ordinary channel messages.
pub const MESSAGE_RECORD_TYPE: &str = "message";

const SYSTEM_SUBTYPES: [&str; 2] = ["channel_join", "channel_leave"];

/// Returns true for records written by a person: a `message` record with a
/// non-empty author that is not a join/leave notice.
#[must_use]
pub fn is_user_message(record: &HistoryRecord) -> bool {
    let is_message = record.kind.as_deref() == Some(MESSAGE_RECORD_TYPE);
    let has_author = record.user.as_deref().is_some_and(|u| !u.trim().is_empty());
    let is_system_message = record
        .subtype
        .as_deref()
        .is_some_and(|s| SYSTEM_SUBTYPES.contains(&s));

    is_message && has_author && !is_system_message
}

/// Filters raw history records down to user messages, preserving order.
///
/// Records whose `ts` cannot be turned into a timestamp are dropped.
#[must_use]
pub fn filter_user_messages(records: Vec<HistoryRecord>) -> Vec<RawMessage> {
    records
        .into_iter()
        .filter(is_user_message)
        .filter_map(|record| {
            let Some(timestamp) = slack_ts_to_iso8601(&record.ts) else {
                warn!(ts = %record.ts, "Dropping history record with unparsable ts");
                return None;
            };

            Some(RawMessage {
                id: record.ts,
                author: record.user.unwrap_or_default(),
                text: record.text.unwrap_or_default(),
                timestamp,
            })
        })
        .collect()
}
