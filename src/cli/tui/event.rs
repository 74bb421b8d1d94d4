//! Terminal event reader
//!
//! Terminal input is read on a background thread and forwarded over a
//! channel, with a tick whenever nothing arrived within the tick rate.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Terminal events
#[derive(Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal was resized; the next draw picks up the new size
    Resize,
    /// No input within the tick rate
    Tick,
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || forward_events(&tx, tick_rate));
        Self { rx }
    }

    /// Receive the next event (blocking)
    pub fn next(&self) -> Result<Event> {
        Ok(self.rx.recv()?)
    }
}

/// Reads terminal events until the receiver goes away
fn forward_events(tx: &mpsc::Sender<Event>, tick_rate: Duration) {
    loop {
        let event = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                // Release and repeat events are dropped
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => Event::Key(key),
                Ok(CrosstermEvent::Resize(..)) => Event::Resize,
                Ok(_) => continue,
                Err(_) => break,
            },
            Ok(false) => Event::Tick,
            Err(_) => break,
        };

        if tx.send(event).is_err() {
            break;
        }
    }
}
