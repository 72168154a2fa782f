pub mod client;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::model::issue::Issue;
use crate::view::{DisplayFormat, IssueList};

pub use client::JiraClient;

/// Issue fields requested from the search API.
pub const LIST_FIELDS: &str =
    "issuetype,summary,assignee,reporter,priority,status,resolution,created,updated";

pub const DEFAULT_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

#[async_trait]
pub trait IssueSource: Send + Sync {
    fn server(&self) -> &str;
    async fn search(&self, jql: &str, limit: u32) -> Result<SearchResult>;
}

/// JQL for the issues of one project, newest first.
pub fn project_jql(project: &str) -> String {
    format!("project=\"{}\" ORDER BY created DESC", project.replace('"', "\\\""))
}

/// Fetch one page of a project's issues and wrap them for display.
pub async fn fetch_issue_list(
    source: &dyn IssueSource,
    project: &str,
    limit: u32,
    display: DisplayFormat,
) -> Result<IssueList> {
    let result = source.search(&project_jql(project), limit).await?;
    Ok(IssueList {
        total: result.total,
        project: project.to_string(),
        server: source.server().to_string(),
        data: result.issues,
        display,
    })
}
