use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseButton, MouseEventKind};

/// Events consumed by the TUI main loop.
pub enum AppEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// Left mouse button pressed at (column, row).
    Press(u16, u16),
    /// Terminal was resized. The loop re-reads the size itself before each draw.
    #[allow(dead_code)]
    Resize(u16, u16),
    /// Periodic tick for driving render updates.
    Tick,
}

/// Polls crossterm events and sends them to the main render loop.
///
/// Runs in a background thread. Sends Key, Press and Resize events as they
/// arrive, plus a Tick every `tick_rate`. Mouse motion is dropped, and does
/// not hold back the next tick.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _handle: std::thread::JoinHandle<()>,
}

impl EventHandler {
    /// Start the event polling thread.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let handle = std::thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                if event::poll(timeout).unwrap_or(false) {
                    let app_event = match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                        Ok(Event::Mouse(mouse)) => match mouse.kind {
                            MouseEventKind::Down(MouseButton::Left) => {
                                Some(AppEvent::Press(mouse.column, mouse.row))
                            }
                            _ => None,
                        },
                        Ok(Event::Resize(w, h)) => Some(AppEvent::Resize(w, h)),
                        _ => None,
                    };
                    if let Some(app_event) = app_event {
                        if tx.send(app_event).is_err() {
                            return;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            rx,
            _handle: handle,
        }
    }

    /// Receive the next event, blocking until one is available.
    pub fn next(&self) -> Result<AppEvent, mpsc::RecvError> {
        self.rx.recv()
    }
}
