use crate::github::response::{PullRequest, User};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct PullRequestRecord {
    pub number: u64,
    pub merged_at: Option<DateTime<Utc>>,
    /// Decoded for inspection only, never exported
    pub author: User,
    pub title: String,
    pub url: String,
    pub body: String,
    /// Reserved, nothing populates it yet
    pub change_representative: String,
    /// Reserved, nothing populates it yet
    pub approved_at: Option<DateTime<Utc>>,
}

impl PullRequestRecord {
    /// Closed pull requests without a merge timestamp were never merged
    pub fn is_target(&self) -> bool {
        self.merged_at.is_some()
    }
}

impl From<PullRequest> for PullRequestRecord {
    fn from(pr: PullRequest) -> Self {
        PullRequestRecord {
            number: pr.number,
            merged_at: pr.merged_at,
            author: pr.user,
            title: pr.title,
            url: pr.html_url,
            body: pr.body.unwrap_or_default(),
            change_representative: String::default(),
            approved_at: None,
        }
    }
}

/// Keeps the merged pull requests, in their original order.
pub fn merged(records: Vec<PullRequestRecord>) -> Vec<PullRequestRecord> {
    records
        .into_iter()
        .filter(PullRequestRecord::is_target)
        .collect()
}
