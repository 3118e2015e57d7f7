use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};

use super::state::BrowseState;
use crate::tui::input::{UiEvent, spawn_input_thread};
use crate::ui::state::BrowseOutcome;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Take over the terminal and pump the event loop until the user exits.
pub fn run(state: &mut BrowseState<'_>) -> Result<BrowseOutcome> {
    let mut terminal = ratatui::init();
    let result = match terminal.clear() {
        Ok(()) => event_loop(&mut terminal, state, &spawn_input_thread()),
        Err(error) => Err(error.into()),
    };
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut BrowseState<'_>,
    events: &Receiver<UiEvent>,
) -> Result<BrowseOutcome> {
    let mut pending_events = VecDeque::new();

    loop {
        state.absorb_receipts();
        state.tick();
        if state.any_share_pending() {
            state.throbber_state.calc_next();
        }

        loop {
            match events.try_recv() {
                // Resizes redraw on the next frame anyway.
                Ok(UiEvent::Resize) => {}
                Ok(event) => pending_events.push_back(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    return Err(anyhow!("terminal input channel disconnected"));
                }
            }
        }

        terminal.draw(|frame| state.draw(frame))?;

        while let Some(event) = pending_events.pop_front() {
            if let UiEvent::Key(key) = event
                && let Some(outcome) = state.handle_key(key)
            {
                return Ok(outcome);
            }
        }

        thread::sleep(FRAME_INTERVAL);
    }
}
