use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::event::KeyAction;
use crate::view::{self, Column, TableData, COLUMN_COUNT};

const PAGE_SIZE: usize = 10;
const MAX_SUMMARY_WIDTH: u16 = 60;

/// Interactive view over a [`TableData`]. The header row, when present,
/// stays pinned above the scrolling data rows.
pub struct TableView {
    data: TableData,
    footer: String,
    urls: Vec<String>,
    state: TableState,
}

impl TableView {
    /// `urls` holds one browse link per data row.
    pub fn new(data: TableData, footer: String, urls: Vec<String>) -> Self {
        let mut state = TableState::default();
        if !data.rows.is_empty() {
            state.select(Some(0));
        }
        Self {
            data,
            footer,
            urls,
            state,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected_url(&self) -> Option<&str> {
        self.selected()
            .and_then(|i| self.urls.get(i))
            .map(String::as_str)
    }

    /// Apply a key. Returns the link to open when the key asks for one.
    pub fn handle_key(&mut self, key: KeyAction) -> Option<String> {
        let Some(last) = self.data.rows.len().checked_sub(1) else {
            return None;
        };
        let current = self.selected().unwrap_or(0);

        let next = match key {
            KeyAction::Up => current.saturating_sub(1),
            KeyAction::Down => (current + 1).min(last),
            KeyAction::PageUp => current.saturating_sub(PAGE_SIZE),
            KeyAction::PageDown => (current + PAGE_SIZE).min(last),
            KeyAction::Top => 0,
            KeyAction::Bottom => last,
            KeyAction::Open => return self.selected_url().map(String::from),
        };
        self.state.select(Some(next));
        None
    }

    fn widths(&self) -> Vec<Constraint> {
        let mut widths = [0u16; COLUMN_COUNT];
        for row in self.data.iter() {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                let len = u16::try_from(cell.chars().count()).unwrap_or(u16::MAX);
                *width = (*width).max(len);
            }
        }
        Column::ALL
            .iter()
            .zip(widths)
            .map(|(column, width)| match column {
                Column::Summary => Constraint::Length(width.min(MAX_SUMMARY_WIDTH)),
                _ => Constraint::Length(width),
            })
            .collect()
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(f.area());

        let rows = self.data.rows.iter().map(to_row);
        let mut table = Table::new(rows, self.widths())
            .block(Block::default().borders(Borders::ALL))
            .column_spacing(2)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        if let Some(header) = &self.data.header {
            table = table.header(to_row(header).style(Style::default().add_modifier(Modifier::BOLD)));
        }
        f.render_stateful_widget(table, chunks[0], &mut self.state);

        let help = "↑/↓ move  ⏎ open  q quit";
        f.render_widget(
            Paragraph::new(Line::from(format!(" {}  |  {help}", self.footer))),
            chunks[1],
        );
    }
}

fn to_row(row: &view::Row) -> Row<'_> {
    Row::new(row.iter().map(|cell| Cell::from(cell.as_str())))
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::issue::{Issue, IssueFields, NamedField};
    use crate::view::DisplayFormat;
    use crate::view::IssueList;

    fn list(count: usize, no_headers: bool) -> IssueList {
        IssueList {
            total: 40,
            project: "TEST".into(),
            server: "https://test.local".into(),
            data: (1..=count)
                .map(|n| Issue {
                    key: format!("TEST-{n}"),
                    fields: IssueFields {
                        summary: Some(format!("Issue number {n}")),
                        status: Some(NamedField::new("Open")),
                        ..Default::default()
                    },
                })
                .collect(),
            display: DisplayFormat {
                plain: false,
                no_headers,
            },
        }
    }

    fn view(count: usize, no_headers: bool) -> TableView {
        let list = list(count, no_headers);
        TableView::new(list.data().unwrap(), list.footer(), list.browse_urls())
    }

    fn screen(view: &mut TableView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 10)).unwrap();
        terminal.draw(|f| view.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn selects_first_row() {
        let view = view(3, false);
        assert_eq!(view.selected(), Some(0));
        assert_eq!(view.selected_url(), Some("https://test.local/browse/TEST-1"));
    }

    #[test]
    fn empty_table_has_no_selection() {
        let mut view = view(0, false);
        assert_eq!(view.selected(), None);
        assert_eq!(view.handle_key(KeyAction::Down), None);
        assert_eq!(view.handle_key(KeyAction::Open), None);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut view = view(3, false);
        view.handle_key(KeyAction::Up);
        assert_eq!(view.selected(), Some(0));

        view.handle_key(KeyAction::Down);
        view.handle_key(KeyAction::Down);
        view.handle_key(KeyAction::Down);
        assert_eq!(view.selected(), Some(2));

        view.handle_key(KeyAction::Top);
        assert_eq!(view.selected(), Some(0));
        view.handle_key(KeyAction::PageDown);
        assert_eq!(view.selected(), Some(2));
        view.handle_key(KeyAction::PageUp);
        assert_eq!(view.selected(), Some(0));
        view.handle_key(KeyAction::Bottom);
        assert_eq!(view.selected(), Some(2));
    }

    #[test]
    fn open_returns_selected_link() {
        let mut view = view(3, false);
        view.handle_key(KeyAction::Down);
        assert_eq!(
            view.handle_key(KeyAction::Open).as_deref(),
            Some("https://test.local/browse/TEST-2")
        );
        assert_eq!(view.selected(), Some(1));
    }

    #[test]
    fn renders_header_rows_and_footer() {
        let mut view = view(2, false);
        let text = screen(&mut view);
        assert!(text.contains("TYPE"));
        assert!(text.contains("RESOLUTION"));
        assert!(text.contains("TEST-1"));
        assert!(text.contains("Issue number 2"));
        assert!(text.contains("Showing 2 of 40 results for project \"TEST\""));
    }

    #[test]
    fn renders_without_header() {
        let mut view = view(2, true);
        let text = screen(&mut view);
        assert!(!text.contains("SUMMARY"));
        assert!(text.contains("TEST-2"));
    }
}
