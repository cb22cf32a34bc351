pub mod github_client;
mod handler;
mod macros;
pub mod response;

pub use github_client::GithubClient;
