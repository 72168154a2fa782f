use std::io::{self, Write};

use anyhow::{bail, Context, Result};

use crate::config;
use crate::jira::{self, JiraClient, DEFAULT_LIMIT};
use crate::tui::{self, TableView};
use crate::view::DisplayFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List(ListArgs),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    pub display: DisplayFormat,
    pub project: Option<String>,
    pub limit: u32,
    pub debug: bool,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            display: DisplayFormat::default(),
            project: None,
            limit: DEFAULT_LIMIT,
            debug: false,
        }
    }
}

/// Parse everything after the program name.
///
/// Supported forms:
///   jira issue list [--plain] [--no-headers] [-p KEY] [--limit N] [--debug]
///   jira issue ls ...
///   jira help
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut rest = args.iter().map(String::as_str);

    match rest.next() {
        None | Some("help" | "-h" | "--help") => return Ok(Command::Help),
        Some("issue" | "issues") => {}
        Some(other) => bail!("Unknown command `{other}`. Run `jira help` for usage"),
    }
    match rest.next() {
        Some("list" | "ls") => {}
        Some("-h" | "--help") | None => return Ok(Command::Help),
        Some(other) => bail!("Unknown issue subcommand `{other}`. Run `jira help` for usage"),
    }

    let mut list = ListArgs::default();
    while let Some(arg) = rest.next() {
        match arg {
            "--plain" => list.display.plain = true,
            "--no-headers" => list.display.no_headers = true,
            "--debug" => list.debug = true,
            "-p" | "--project" => match rest.next() {
                Some(project) if !project.is_empty() => list.project = Some(project.to_string()),
                _ => bail!("Missing value for -p/--project flag"),
            },
            "--limit" => {
                let Some(value) = rest.next() else {
                    bail!("Missing value for --limit flag");
                };
                list.limit = value
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .with_context(|| format!("Invalid --limit `{value}`: expected a positive number"))?;
            }
            "-h" | "--help" => return Ok(Command::Help),
            other => bail!("Unknown flag `{other}`"),
        }
    }

    Ok(Command::List(list))
}

/// Fetch the project's issues and show them as plain text or in the interactive table.
pub async fn handle_list(args: ListArgs) -> Result<()> {
    let config = config::load_config()?;
    let project = args.project.unwrap_or_else(|| config.project.clone());
    let client = JiraClient::from_config(&config);

    tracing::info!(%project, limit = args.limit, plain = args.display.plain, "listing issues");
    let list = jira::fetch_issue_list(&client, &project, args.limit, args.display).await?;

    if list.display.plain {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        list.render_plain(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    let view = TableView::new(list.data()?, list.footer(), list.browse_urls());
    tui::run(view).await
}

pub fn print_help() {
    print!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "jira: list Jira issues in the terminal

USAGE:
  jira issue list [OPTIONS]   List issues of a project

LIST OPTIONS:
  --plain              Print tab-delimited text instead of the interactive table
  --no-headers         Leave out the header row
  -p, --project <KEY>  Project to list (defaults to `project` in the config)
  --limit <N>          Maximum number of issues to fetch (default {DEFAULT_LIMIT})
  --debug              Verbose logging on stderr

CONFIG:
  {} (override with {})
  The API token may be given in {}
",
        config::config_path().display(),
        config::CONFIG_FILE_ENV,
        config::API_TOKEN_ENV
    )
}
