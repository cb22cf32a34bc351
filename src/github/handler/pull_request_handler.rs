use crate::github::{response::PullRequest, GithubClient};
use anyhow::Result;

const CLOSED_STATE: &str = "closed";

pub struct PullRequestHandler<'client> {
    client: &'client GithubClient,
    repository: String,
}

impl<'client> PullRequestHandler<'client> {
    pub fn new(client: &'client GithubClient, repository: impl Into<String>) -> Self {
        PullRequestHandler {
            client,
            repository: repository.into(),
        }
    }

    pub async fn closed(&self, base: &str) -> Result<Vec<PullRequest>> {
        self.client
            .list_pull_requests(&self.repository, CLOSED_STATE, base)
            .await
    }
}
