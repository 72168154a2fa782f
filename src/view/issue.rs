use std::io::Write;

use super::{DisplayFormat, Result, TableData, PLAIN_DELIMITER};
use crate::model::issue::Issue;

/// Issues returned by one search, plus how to display them.
#[derive(Debug, Clone)]
pub struct IssueList {
    pub total: u32,
    pub project: String,
    pub server: String,
    pub data: Vec<Issue>,
    pub display: DisplayFormat,
}

impl IssueList {
    /// Table rows for this list, with the header unless `no_headers` is set.
    pub fn data(&self) -> Result<TableData> {
        TableData::build(&self.data, !self.display.no_headers)
    }

    /// Write the table as tab-delimited lines.
    ///
    /// Every row is extracted before the first write, so a bad timestamp
    /// leaves `w` untouched. Write errors are returned as-is.
    pub fn render_plain<W: Write>(&self, w: &mut W) -> Result<()> {
        let data = self.data()?;
        for row in data.iter() {
            writeln!(w, "{}", row.join(PLAIN_DELIMITER))?;
        }
        Ok(())
    }

    pub fn footer(&self) -> String {
        format!(
            "Showing {} of {} results for project \"{}\"",
            self.data.len(),
            self.total,
            self.project
        )
    }

    /// Browse links, indexed like the data rows.
    pub fn browse_urls(&self) -> Vec<String> {
        self.data
            .iter()
            .map(|issue| issue.browse_url(&self.server))
            .collect()
    }
}
