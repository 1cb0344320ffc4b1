use crate::app::{App, AppState};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Enum for different types of events.
pub enum Event {
    Input(CEvent),
    Tick,
}

/// Applies one event from the input reader. `None` means the reader has
/// stopped; with no way to receive keys the app quits.
pub fn handle_event(event: Option<Event>, app: &mut App) {
    match event {
        Some(Event::Input(CEvent::Key(key))) => handle_key(key, app),
        Some(Event::Input(_)) => {}
        Some(Event::Tick) => app.status_indicator.tick(),
        None => {
            log::error!("Terminal input closed, quitting");
            app.state = AppState::Quit;
        }
    }
}

pub fn handle_key(key: KeyEvent, app: &mut App) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.state {
        AppState::Chat => handle_chat_input(key, app),
        AppState::QuitConfirm => handle_quit_confirm_input(key, app),
        AppState::Quit => {}
    }
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Enter => {
            // Enter is ignored while the send control is disabled.
            if app.session.can_send() {
                app.send();
            }
        }
        KeyCode::PageUp => app.session.scroll_up(),
        KeyCode::PageDown => app.session.scroll_down(),
        KeyCode::Backspace => app.session.pop_char(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.request_quit(),
                    'u' => app.session.scroll_up(),
                    'd' => app.session.scroll_down(),
                    'l' => app.console.toggle(),
                    _ => {}
                }
            } else {
                app.session.push_char(c);
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = AppState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = AppState::Chat;
        }
        _ => {}
    }
}
