use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// One item of the `GET /repos/{owner}/{repo}/pulls` listing.
#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    /// `null` for pull requests closed without merging
    pub merged_at: Option<DateTime<Utc>>,
    /// `null` for deleted accounts
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: User,
    pub title: String,
    pub html_url: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    pub login: String,
}

fn null_as_default<'de, D>(deserializer: D) -> Result<User, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<User>::deserialize(deserializer)?.unwrap_or_default())
}
