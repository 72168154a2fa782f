//! Issue-to-table transformation.
//!
//! [`Column`] is the single source of truth for column order: the header row
//! and every data row are produced by walking [`Column::ALL`]. [`TableData`]
//! is renderer-agnostic and is consumed either by the plain-text renderer in
//! [`issue`] or by the interactive table in `crate::tui`.

pub mod error;
pub mod issue;

pub use error::{Result, ViewError};
pub use issue::IssueList;

use crate::model::issue::Issue;
use crate::util::time::format_date_time;

/// Delimiter between fields in plain output.
pub const PLAIN_DELIMITER: &str = "\t";

pub const COLUMN_COUNT: usize = 10;

/// One table line, header or data.
pub type Row = [String; COLUMN_COUNT];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFormat {
    /// Write tab-delimited text instead of opening the interactive table.
    pub plain: bool,
    /// Leave out the header row, in both plain and interactive mode.
    pub no_headers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Type,
    Key,
    Summary,
    Assignee,
    Reporter,
    Priority,
    Status,
    Resolution,
    Created,
    Updated,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Type,
        Column::Key,
        Column::Summary,
        Column::Assignee,
        Column::Reporter,
        Column::Priority,
        Column::Status,
        Column::Resolution,
        Column::Created,
        Column::Updated,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Type => "TYPE",
            Column::Key => "KEY",
            Column::Summary => "SUMMARY",
            Column::Assignee => "ASSIGNEE",
            Column::Reporter => "REPORTER",
            Column::Priority => "PRIORITY",
            Column::Status => "STATUS",
            Column::Resolution => "RESOLUTION",
            Column::Created => "CREATED",
            Column::Updated => "UPDATED",
        }
    }

    /// Display value of this column for `issue`. Absent fields yield `""`.
    pub fn extract(self, issue: &Issue) -> Result<String> {
        let value = match self {
            Column::Type => issue.issue_type(),
            Column::Key => Some(issue.key.as_str()),
            Column::Summary => issue.summary(),
            Column::Assignee => issue.assignee(),
            Column::Reporter => issue.reporter(),
            Column::Priority => issue.priority(),
            Column::Status => issue.status(),
            Column::Resolution => issue.resolution(),
            Column::Created => {
                return timestamp(issue, "created", issue.fields.created.as_deref())
            }
            Column::Updated => {
                return timestamp(issue, "updated", issue.fields.updated.as_deref())
            }
        };
        Ok(value.unwrap_or_default().to_string())
    }
}

fn timestamp(issue: &Issue, field: &'static str, value: Option<&str>) -> Result<String> {
    let Some(value) = value else {
        return Ok(String::new());
    };
    format_date_time(value).map_err(|source| ViewError::InvalidTimestamp {
        key: issue.key.clone(),
        field,
        value: value.to_string(),
        source,
    })
}

pub fn header_row() -> Row {
    Column::ALL.map(|column| column.header().to_string())
}

/// Extract one row from an issue, in [`Column::ALL`] order.
pub fn issue_row(issue: &Issue) -> Result<Row> {
    let mut row: Row = Default::default();
    for (cell, column) in row.iter_mut().zip(Column::ALL) {
        *cell = column.extract(issue)?;
    }
    Ok(row)
}

/// Header row (when included) followed by one row per issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub header: Option<Row>,
    pub rows: Vec<Row>,
}

impl TableData {
    pub fn build(issues: &[Issue], with_header: bool) -> Result<Self> {
        let rows = issues.iter().map(issue_row).collect::<Result<Vec<_>>>()?;
        Ok(Self {
            header: with_header.then(header_row),
            rows,
        })
    }

    /// All rows in output order, header first.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.header.iter().chain(self.rows.iter())
    }

    pub fn len(&self) -> usize {
        self.rows.len() + usize::from(self.header.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::issue::{IssueFields, NamedField, UserField};

    fn sparse_issue() -> Issue {
        Issue {
            key: "TEST-9".into(),
            fields: IssueFields {
                reporter: Some(UserField::new("Person A")),
                ..Default::default()
            },
        }
    }

    #[test]
    fn header_matches_column_contract() {
        assert_eq!(
            header_row(),
            [
                "TYPE",
                "KEY",
                "SUMMARY",
                "ASSIGNEE",
                "REPORTER",
                "PRIORITY",
                "STATUS",
                "RESOLUTION",
                "CREATED",
                "UPDATED"
            ]
        );
    }

    #[test]
    fn sparse_issue_yields_empty_cells() {
        let row = issue_row(&sparse_issue()).unwrap();
        assert_eq!(
            row,
            ["", "TEST-9", "", "", "Person A", "", "", "", "", ""]
        );
    }

    #[test]
    fn each_missing_field_only_blanks_its_own_column() {
        let full = Issue {
            key: "TEST-1".into(),
            fields: IssueFields {
                summary: Some("s".into()),
                issue_type: Some(NamedField::new("Bug")),
                assignee: Some(UserField::new("a")),
                reporter: Some(UserField::new("r")),
                priority: Some(NamedField::new("High")),
                status: Some(NamedField::new("Done")),
                resolution: Some(NamedField::new("Fixed")),
                created: Some("2020-12-13T14:05:20.974+0100".into()),
                updated: Some("2020-12-13T14:07:20.974+0100".into()),
            },
        };
        let full_row = issue_row(&full).unwrap();

        let strip: [(usize, fn(&mut IssueFields)); 9] = [
            (0, |f: &mut IssueFields| f.issue_type = None),
            (2, |f: &mut IssueFields| f.summary = None),
            (3, |f: &mut IssueFields| f.assignee = None),
            (4, |f: &mut IssueFields| f.reporter = None),
            (5, |f: &mut IssueFields| f.priority = None),
            (6, |f: &mut IssueFields| f.status = None),
            (7, |f: &mut IssueFields| f.resolution = None),
            (8, |f: &mut IssueFields| f.created = None),
            (9, |f: &mut IssueFields| f.updated = None),
        ];

        for (index, clear) in strip {
            let mut issue = full.clone();
            clear(&mut issue.fields);
            let row = issue_row(&issue).unwrap();
            for (i, cell) in row.iter().enumerate() {
                if i == index {
                    assert_eq!(cell, "", "column {i} should be blank");
                } else {
                    assert_eq!(cell, &full_row[i], "column {i} should be untouched");
                }
            }
        }
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let mut issue = sparse_issue();
        issue.fields.updated = Some("13/12/2020".into());

        let err = issue_row(&issue).unwrap_err();
        match &err {
            ViewError::InvalidTimestamp {
                key, field, value, ..
            } => {
                assert_eq!(key, "TEST-9");
                assert_eq!(*field, "updated");
                assert_eq!(value, "13/12/2020");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("13/12/2020"));
    }

    #[test]
    fn table_data_header_is_optional() {
        let issues = vec![sparse_issue()];

        let with = TableData::build(&issues, true).unwrap();
        assert_eq!(with.len(), 2);
        assert_eq!(with.iter().next(), Some(&header_row()));

        let without = TableData::build(&issues, false).unwrap();
        assert_eq!(without.len(), 1);
        assert_eq!(without.iter().next().map(|r| r[1].as_str()), Some("TEST-9"));
    }

    #[test]
    fn empty_issue_list() {
        let data = TableData::build(&[], false).unwrap();
        assert!(data.is_empty());
        assert_eq!(TableData::build(&[], true).unwrap().len(), 1);
    }
}
