use crate::{
    config::Config,
    github::GithubClient,
    pull_request::{self, PullRequestRecord},
    report,
};
use anyhow::{Context, Result};

/// Fetches, filters and writes the report. Returns the number of exported rows.
///
/// The output file is only created once the API response was decoded.
pub async fn run(config: &Config) -> Result<usize> {
    let client = GithubClient::new(&config.api_url, &config.token);

    log::info!("Fetching closed pull requests of {}", config.repository);
    let pull_requests = client
        .repo(&config.repository)
        .pull_requests()
        .closed(&config.base)
        .await
        .context("Cannot fetch the pull requests")?;

    let records = pull_request::merged(
        pull_requests
            .into_iter()
            .map(PullRequestRecord::from)
            .collect(),
    );
    log::debug!("{} pull requests were merged", records.len());

    log::info!("Writing {}", config.output.display());
    report::write(&config.output, &records, &config.zone).context("Cannot write the report")?;

    Ok(records.len())
}
