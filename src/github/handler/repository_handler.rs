use super::pull_request_handler::PullRequestHandler;
use crate::github::GithubClient;

pub struct RepositoryHandler<'client> {
    client: &'client GithubClient,
    repository: String,
}

impl<'client> RepositoryHandler<'client> {
    /// `repository` is the `owner/repository` pair, used verbatim in the path
    pub fn new(client: &'client GithubClient, repository: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            repository: repository.into(),
        }
    }

    pub fn pull_requests(&self) -> PullRequestHandler<'client> {
        PullRequestHandler::new(self.client, &self.repository)
    }
}
