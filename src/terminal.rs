use crate::errors::ChatResult;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type ChatTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enables raw mode and switches to the alternate screen. Raw mode is turned
/// back off if anything after it fails.
pub fn setup_terminal() -> ChatResult<ChatTerminal> {
    enable_raw_mode()?;
    let terminal = undo_on_error(enter_alternate_screen(), || {
        if let Err(e) = disable_raw_mode() {
            log::error!("Failed to disable raw mode: {}", e);
        }
    })?;
    Ok(terminal)
}

fn enter_alternate_screen() -> io::Result<ChatTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

pub fn restore_terminal(terminal: &mut ChatTerminal) -> ChatResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Runs `undo` when `result` is an error, then hands `result` back.
pub fn undo_on_error<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn undo_runs_only_on_failure() {
        let undone = Cell::new(0);

        let ok: Result<u8, io::Error> = undo_on_error(Ok(1), || undone.set(undone.get() + 1));
        assert_eq!(ok.unwrap(), 1);
        assert_eq!(undone.get(), 0);

        let failed: Result<u8, io::Error> = undo_on_error(
            Err(io::Error::new(io::ErrorKind::Other, "alternate screen unavailable")),
            || undone.set(undone.get() + 1),
        );
        assert!(failed.is_err());
        assert_eq!(undone.get(), 1);
    }
}
