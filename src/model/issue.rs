use serde::{Deserialize, Serialize};

/// A single Jira issue as returned by the search API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

/// Nested fields of an issue. Every field may be missing or `null` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(rename = "issuetype", skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<NamedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<UserField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<UserField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<NamedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NamedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<NamedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedField {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserField {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl NamedField {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl UserField {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

impl Issue {
    pub fn issue_type(&self) -> Option<&str> {
        self.fields.issue_type.as_ref().map(|t| t.name.as_str())
    }

    pub fn summary(&self) -> Option<&str> {
        self.fields.summary.as_deref()
    }

    pub fn assignee(&self) -> Option<&str> {
        self.fields.assignee.as_ref().map(|u| u.display_name.as_str())
    }

    pub fn reporter(&self) -> Option<&str> {
        self.fields.reporter.as_ref().map(|u| u.display_name.as_str())
    }

    pub fn priority(&self) -> Option<&str> {
        self.fields.priority.as_ref().map(|p| p.name.as_str())
    }

    pub fn status(&self) -> Option<&str> {
        self.fields.status.as_ref().map(|s| s.name.as_str())
    }

    pub fn resolution(&self) -> Option<&str> {
        self.fields.resolution.as_ref().map(|r| r.name.as_str())
    }

    /// Link to the issue in the Jira web UI.
    pub fn browse_url(&self, server: &str) -> String {
        format!("{}/browse/{}", server.trim_end_matches('/'), self.key)
    }
}
