use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use base64::Engine;

use super::{IssueSource, SearchResult, LIST_FIELDS};
use crate::config::Config;

pub struct JiraClient {
    base_url: String,
    auth_header: String,
    client: reqwest::Client,
}

impl JiraClient {
    pub fn new(server: &str, login: &str, api_token: &str) -> Self {
        let creds = format!("{login}:{api_token}");
        let encoded = base64::engine::general_purpose::STANDARD.encode(creds);
        Self {
            base_url: server.trim_end_matches('/').to_string(),
            auth_header: format!("Basic {encoded}"),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.server(),
            &config.login,
            config.api_token.as_deref().unwrap_or_default(),
        )
    }

    fn search_url(&self, jql: &str, limit: u32) -> String {
        format!(
            "{}/rest/api/3/search?jql={}&maxResults={}&fields={}",
            self.base_url,
            urlencoding::encode(jql),
            limit,
            LIST_FIELDS
        )
    }
}

#[async_trait]
impl IssueSource for JiraClient {
    fn server(&self) -> &str {
        &self.base_url
    }

    async fn search(&self, jql: &str, limit: u32) -> Result<SearchResult> {
        let url = self.search_url(jql, limit);
        tracing::debug!(%url, "searching issues");

        let resp = self
            .client
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Jira API request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("Jira API returned {status}: {}", body.trim());
        }

        let result: SearchResult = resp.json().await.context("Failed to parse Jira response")?;
        tracing::info!(total = result.total, fetched = result.issues.len(), "fetched issues");
        Ok(result)
    }
}
