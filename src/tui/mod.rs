pub mod render;
pub mod state;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use crate::presenter::schedule::CancelToken;
use ratatui::prelude::*;
use state::BoardState;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Commands the TUI sends back to the presenter host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    Quit,
    Pause,
    Resume,
}

/// Map a key press to a command.
pub fn command_for_key(code: KeyCode) -> Option<TuiCommand> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(TuiCommand::Quit),
        KeyCode::Char('p') => Some(TuiCommand::Pause),
        KeyCode::Char('r') => Some(TuiCommand::Resume),
        _ => None,
    }
}

/// Apply a command to the board. Returns `false` once the host should stop.
pub fn apply_command(
    cmd: &TuiCommand,
    state_tx: &watch::Sender<BoardState>,
    cancel: &CancelToken,
) -> bool {
    match cmd {
        TuiCommand::Pause => {
            state_tx.send_modify(|s| {
                if !s.is_paused {
                    s.is_paused = true;
                    s.push_log("INFO", "Paused".to_string());
                }
            });
            true
        }
        TuiCommand::Resume => {
            state_tx.send_modify(|s| {
                if s.is_paused {
                    s.is_paused = false;
                    s.push_log("INFO", "Resumed".to_string());
                }
            });
            true
        }
        TuiCommand::Quit => {
            tracing::info!("quit requested");
            cancel.cancel();
            false
        }
    }
}

/// Run the TUI. Reads state from `state_rx`, sends commands on `cmd_tx`.
pub async fn run_tui(
    state_rx: watch::Receiver<BoardState>,
    cmd_tx: mpsc::Sender<TuiCommand>,
) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = tui_loop(&mut terminal, state_rx, cmd_tx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn tui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state_rx: watch::Receiver<BoardState>,
    cmd_tx: mpsc::Sender<TuiCommand>,
) -> Result<()> {
    let mut spinner_frame: u8 = 0;
    loop {
        let state = state_rx.borrow().clone();
        terminal.draw(|f| render::draw(f, &state, spinner_frame))?;
        spinner_frame = spinner_frame.wrapping_add(1);

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(cmd) = command_for_key(key.code) {
                        let quit = cmd == TuiCommand::Quit;
                        let _ = cmd_tx.send(cmd).await;
                        if quit {
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}
