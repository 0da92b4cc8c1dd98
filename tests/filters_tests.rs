use panorama::slack::HistoryRecord;
use panorama::utils::filters::{filter_user_messages, is_user_message};

fn record(kind: Option<&str>, subtype: Option<&str>, user: Option<&str>, ts: &str) -> HistoryRecord {
    HistoryRecord {
        kind: kind.map(ToString::to_string),
        subtype: subtype.map(ToString::to_string),
        user: user.map(ToString::to_string),
        text: Some(format!("text at {ts}")),
        ts: ts.to_string(),
    }
}

#[test]
fn test_plain_user_message_qualifies() {
    assert!(is_user_message(&record(Some("message"), None, Some("U1"), "1.0")));
}

#[test]
fn test_records_without_marker_or_author_are_rejected() {
    assert!(!is_user_message(&record(None, None, Some("U1"), "1.0")));
    assert!(!is_user_message(&record(Some("channel_topic"), None, Some("U1"), "1.0")));
    assert!(!is_user_message(&record(Some("message"), Some("bot_message"), None, "1.0")));
    assert!(!is_user_message(&record(Some("message"), None, Some("   "), "1.0")));
}

#[test]
fn test_join_and_leave_notices_are_rejected() {
    assert!(!is_user_message(&record(Some("message"), Some("channel_join"), Some("U1"), "1.0")));
    assert!(!is_user_message(&record(Some("message"), Some("channel_leave"), Some("U1"), "1.0")));
}

#[test]
fn test_other_subtypes_from_users_are_kept() {
    assert!(is_user_message(&record(
        Some("message"),
        Some("thread_broadcast"),
        Some("U1"),
        "1.0"
    )));
}

#[test]
fn test_filter_preserves_order_and_maps_fields() {
    let records = vec![
        record(Some("message"), None, Some("U1"), "1700000000.000100"),
        record(Some("message"), Some("channel_join"), Some("U2"), "1700000001.000100"),
        record(Some("message"), None, Some("U3"), "1700000002.000100"),
    ];

    let messages = filter_user_messages(records);

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, "1700000000.000100");
    assert_eq!(messages[0].author, "U1");
    assert_eq!(messages[0].text, "text at 1700000000.000100");
    assert_eq!(messages[1].author, "U3");
    assert_eq!(messages[1].timestamp, "2023-11-14T22:13:22.000Z");
}

#[test]
fn test_missing_text_becomes_empty_and_bad_ts_is_dropped() {
    let mut no_text = record(Some("message"), None, Some("U1"), "1700000000.000100");
    no_text.text = None;
    let bad_ts = record(Some("message"), None, Some("U2"), "yesterday");

    let messages = filter_user_messages(vec![no_text, bad_ts]);

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "");
}
