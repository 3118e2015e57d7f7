//! Terminal input pumped onto a channel.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Events the browser loop consumes.
#[derive(Debug, Clone)]
pub enum UiEvent {
    Key(KeyEvent),
    Resize,
}

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Read terminal events on a dedicated thread until the receiving side
/// goes away or the terminal stops answering.
pub fn spawn_input_thread() -> Receiver<UiEvent> {
    let (tx, rx) = channel();
    thread::spawn(move || input_loop(&tx));
    rx
}

fn input_loop(tx: &Sender<UiEvent>) {
    loop {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {
                let forwarded = match event::read() {
                    // Release events only exist on some platforms and
                    // would double every keypress.
                    Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                        tx.send(UiEvent::Key(key))
                    }
                    Ok(Event::Resize(_, _)) => tx.send(UiEvent::Resize),
                    Ok(_) => Ok(()),
                    Err(error) => {
                        log::warn!("terminal input read failed: {error}");
                        return;
                    }
                };
                if forwarded.is_err() {
                    return;
                }
            }
            Ok(false) => {}
            Err(error) => {
                log::warn!("terminal input poll failed: {error}");
                return;
            }
        }
    }
}
