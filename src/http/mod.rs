use reqwest::{
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
    Client, RequestBuilder,
};
use std::ops::Deref;
use thiserror::Error;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    // an empty token is still sent, the API is the one rejecting it
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, "prexport")
    }
}

pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| {
            if cause.is_builder() {
                Error::InvalidRequest { cause }
            } else {
                Error::RequestFailed { cause }
            }
        })?;

        let status = response.status();
        log::debug!("{} responded with {}", response.url(), status);

        if !status.is_success() {
            return Err(Error::StatusCode {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid request")]
    InvalidRequest {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Request failed")]
    RequestFailed {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Request failed with status code: {status}")]
    StatusCode { status: u16 },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
