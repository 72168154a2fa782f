pub mod event;
pub mod table;

use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use event::Action;
pub use table::TableView;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Show `view` full screen until the user quits.
pub async fn run(mut view: TableView) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = or_restore(enter_terminal(), restore_terminal)?;

    // Restore the terminal before the panic message is printed
    let original_hook = Arc::new(panic::take_hook());
    let hook = Arc::clone(&original_hook);
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        (*hook)(panic_info);
    }));

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    tokio::spawn(async move {
        event::run_event_loop(action_tx).await;
    });

    let result = async {
        loop {
            terminal.draw(|f| view.render(f))?;

            match action_rx.recv().await {
                Some(Action::Key(key)) => {
                    if let Some(url) = view.handle_key(key) {
                        open_in_browser(&url).await;
                    }
                }
                Some(Action::Resize) => {}
                Some(Action::Quit) | None => break,
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    panic::set_hook(Box::new(move |panic_info| (*original_hook)(panic_info)));

    let _ = terminal.show_cursor();
    restore_terminal();

    result
}

fn enter_terminal() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Pass `result` through, running `cleanup` first when it is an error.
fn or_restore<T>(result: Result<T>, cleanup: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        cleanup();
    }
    result
}

const WINDOWS_START: &[&str] = &["/C", "start", ""];

fn browser_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", WINDOWS_START)
    } else {
        ("xdg-open", &[])
    }
}

async fn open_in_browser(url: &str) {
    let (program, args) = browser_command();
    let spawned = tokio::process::Command::new(program)
        .args(args)
        .arg(url)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn();

    match spawned {
        Ok(mut child) => {
            if let Err(e) = child.wait().await {
                tracing::warn!(%url, error = %e, "browser exited abnormally");
            }
        }
        Err(e) => tracing::warn!(%url, program, error = %e, "failed to launch browser"),
    }
}
