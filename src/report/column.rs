use crate::pull_request::PullRequestRecord;
use chrono::{DateTime, FixedOffset, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub struct Column {
    pub header: &'static str,
    value: fn(&PullRequestRecord, &FixedOffset) -> String,
}

impl Column {
    pub fn value(&self, record: &PullRequestRecord, zone: &FixedOffset) -> String {
        (self.value)(record, zone)
    }
}

// the "chnage" typo is what downstream sheets expect
pub const COLUMNS: [Column; 7] = [
    Column {
        header: "PR number",
        value: |record, _| record.number.to_string(),
    },
    Column {
        header: "master applied at",
        value: |record, zone| format_timestamp(record.merged_at.as_ref(), zone),
    },
    Column {
        header: "title",
        value: |record, _| record.title.to_owned(),
    },
    Column {
        header: "URL",
        value: |record, _| record.url.to_owned(),
    },
    Column {
        header: "body",
        value: |record, _| record.body.to_owned(),
    },
    Column {
        header: "chnage representative",
        value: |record, _| record.change_representative.to_owned(),
    },
    Column {
        header: "approved at",
        value: |record, zone| format_timestamp(record.approved_at.as_ref(), zone),
    },
];

/// Renders the wall-clock time in `zone`, dropping the offset. Absent is empty.
pub fn format_timestamp(timestamp: Option<&DateTime<Utc>>, zone: &FixedOffset) -> String {
    timestamp
        .map(|ts| ts.with_timezone(zone).format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}
