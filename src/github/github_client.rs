use super::{handler::repository_handler::RepositoryHandler, response::PullRequest};
use crate::{get, http::Error};
use anyhow::Result;

pub struct GithubClient {
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        GithubClient {
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    pub fn repo(&self, repository: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, repository)
    }

    /// Lists the first page of pull requests in `state` targeting `base`.
    ///
    /// Further pages are never requested.
    pub(super) async fn list_pull_requests(
        &self,
        repository: &str,
        state: &str,
        base: &str,
    ) -> Result<Vec<PullRequest>> {
        let uri = format!(
            "{}/repos/{}/pulls?state={}&base={}",
            self.api_url, repository, state, base
        );

        log::debug!("Listing pull requests: {}", uri);
        let response = get!(&uri, &self.token)?;

        let pull_requests = serde_json::from_str::<Vec<PullRequest>>(&response)
            .map_err(|cause| Error::ParseResponseError { cause })?;

        log::debug!("Decoded {} pull requests", pull_requests.len());

        Ok(pull_requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const PULLS: &str = r#"[
        {"number":2,"merged_at":null,"user":{"login":"bob"},"title":"Closed","html_url":"https://x/2","body":null},
        {"number":1,"merged_at":"2024-01-02T03:04:05Z","user":{"login":"alice"},"title":"Fix bug","html_url":"https://x/1","body":"desc"}
    ]"#;

    #[tokio::test]
    async fn should_list_closed_pull_requests() -> Result<()> {
        let mut server = Server::new_async().await;

        let m = server
            .mock("GET", "/repos/octo/hello/pulls")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("state".into(), "closed".into()),
                Matcher::UrlEncoded("base".into(), "master".into()),
            ]))
            .match_header("authorization", "token secret")
            .with_header("content-type", "application/json")
            .with_body(PULLS)
            .create_async()
            .await;

        let client = GithubClient::new(server.url(), "secret");
        let pull_requests = client.repo("octo/hello").pull_requests().closed("master").await?;

        m.assert_async().await;
        assert_eq!(pull_requests.len(), 2);
        assert_eq!(pull_requests[0].number, 2);
        assert_eq!(pull_requests[1].user.login, "alice");

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_with_status_code() -> Result<()> {
        let mut server = Server::new_async().await;

        let m = server
            .mock("GET", "/repos/octo/missing/pulls")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let client = GithubClient::new(server.url(), "");
        let err = client
            .repo("octo/missing")
            .pull_requests()
            .closed("master")
            .await
            .unwrap_err();

        m.assert_async().await;
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::StatusCode { status: 404 })
        ));
        assert!(err.to_string().contains("404"));

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_to_decode_unexpected_body() -> Result<()> {
        let mut server = Server::new_async().await;

        let m = server
            .mock("GET", "/repos/octo/hello/pulls")
            .match_query(Matcher::Any)
            .with_body(r#"{"message":"not a list"}"#)
            .create_async()
            .await;

        let client = GithubClient::new(server.url(), "secret");
        let err = client
            .repo("octo/hello")
            .pull_requests()
            .closed("master")
            .await
            .unwrap_err();

        m.assert_async().await;
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ParseResponseError { .. })
        ));

        Ok(())
    }
}
