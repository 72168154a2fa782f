use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Key(KeyAction),
    Resize,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Open,
}

pub async fn run_event_loop(tx: mpsc::UnboundedSender<Action>) {
    let mut reader = EventStream::new();

    while let Some(event) = reader.next().await {
        let action = match event {
            Ok(Event::Key(key)) => key_to_action(key),
            Ok(Event::Resize(_, _)) => Some(Action::Resize),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "terminal event stream failed");
                break;
            }
        };
        if let Some(action) = action {
            if tx.send(action).is_err() {
                break;
            }
        }
    }
}

fn key_to_action(key: KeyEvent) -> Option<Action> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Key(KeyAction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Key(KeyAction::Down)),
        KeyCode::PageUp => Some(Action::Key(KeyAction::PageUp)),
        KeyCode::PageDown => Some(Action::Key(KeyAction::PageDown)),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Key(KeyAction::Top)),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Key(KeyAction::Bottom)),
        KeyCode::Enter => Some(Action::Key(KeyAction::Open)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
