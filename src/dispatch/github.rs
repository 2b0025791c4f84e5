use std::time::Duration;

use async_trait::async_trait;

use super::{DispatchError, DispatchEvent, DispatchOutcome, DispatchStatus, Dispatcher};
use crate::config::Config;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("waitlist/", env!("CARGO_PKG_VERSION"));

/// Fires a `repository_dispatch` event at a GitHub repository.
pub struct GithubDispatcher {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl GithubDispatcher {
    pub fn new(url: &str, token: &str, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            url: url.to_string(),
            token: token.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, String> {
        Self::new(
            &config.dispatch_url,
            &config.github_token,
            config.dispatch_timeout,
        )
    }
}

#[async_trait]
impl Dispatcher for GithubDispatcher {
    fn name(&self) -> &str {
        "github"
    }

    async fn dispatch(&self, event: &DispatchEvent) -> Result<DispatchOutcome, DispatchError> {
        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .header("Accept", GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .json(event)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DispatchError::Timeout
                } else {
                    DispatchError::Transport(e.to_string())
                }
            })?;

        let status_code = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .unwrap_or_default()
            .chars()
            .take(1024)
            .collect::<String>();

        Ok(DispatchOutcome {
            status: DispatchStatus::from_status_code(status_code),
            status_code,
            body,
        })
    }
}
