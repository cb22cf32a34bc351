use anyhow::{Context, Result};
use chrono::FixedOffset;
use clap::Parser;
use std::{env, ffi::OsString, path::PathBuf};

const DEFAULT_OUTPUT_FILE_NAME: &str = "out.csv";
const DEFAULT_BASE_BRANCH_NAME: &str = "master";
const DEFAULT_API_URL: &str = "https://api.github.com";

const SINGLE_DASH_OUT_FLAG: &str = "-out";

const TOKEN_ENV_KEY: &str = "GITHUB_TOKEN";

/// Asia/Tokyo, which observes no daylight saving time.
const REPORT_UTC_OFFSET_SECONDS: i32 = 9 * 60 * 60;

/// Export the pull requests merged into a repository's main branch as CSV
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Target repository, as `owner/repository`
    pub repository: String,

    /// The file name of the result
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE_NAME)]
    pub out: PathBuf,

    /// Base branch the pull requests were merged into
    #[arg(long, default_value = DEFAULT_BASE_BRANCH_NAME)]
    pub base: String,

    #[arg(long, default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,

    /// Log request details
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub repository: String,
    pub output: PathBuf,
    pub base: String,
    pub api_url: String,
    pub token: String,
    pub zone: FixedOffset,
    pub log_level: log::Level,
}

impl Config {
    pub fn load() -> Result<Config> {
        let token = env::var(TOKEN_ENV_KEY).unwrap_or_default();

        Config::new(Cli::parse_from(long_out_flag(env::args_os())), token)
    }

    pub fn new(cli: Cli, token: impl Into<String>) -> Result<Config> {
        let zone = FixedOffset::east_opt(REPORT_UTC_OFFSET_SECONDS)
            .context("Invalid report time zone offset")?;

        let log_level = if cli.verbose {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        Ok(Config {
            repository: cli.repository,
            output: cli.out,
            base: cli.base,
            api_url: cli.api_url.trim_end_matches('/').to_owned(),
            token: token.into(),
            zone,
            log_level,
        })
    }
}

/// Rewrites `-out` and `-out=<path>` into `--out`, which clap would read as
/// `-o` followed by `ut`.
pub fn long_out_flag<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let rewritten = match arg.to_str() {
                Some(SINGLE_DASH_OUT_FLAG) => Some(OsString::from("--out")),
                Some(flag) if flag.starts_with("-out=") => {
                    Some(OsString::from(format!("-{}", flag)))
                }
                _ => None,
            };

            rewritten.unwrap_or(arg)
        })
        .collect()
}
