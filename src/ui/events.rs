//! The application event channel.
//!
//! A dedicated thread translates crossterm input into [`AppEvent`]s and
//! emits ticks; fetch tasks complete by sending their outcome into the
//! same channel. Completion events are stamped with the epoch of the
//! request they belong to so outcomes from superseded requests can be
//! ignored.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::api::ApiError;
use crate::domain::Vehicle;

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Plate lookup finished.
    LookupFetched {
        epoch: u64,
        result: Result<Vehicle, ApiError>,
    },
    /// Listing fetch finished.
    ListingFetched {
        epoch: u64,
        result: Result<Vec<Vehicle>, ApiError>,
    },
    /// Record load for the edit form finished.
    RecordLoaded {
        epoch: u64,
        result: Result<Vehicle, ApiError>,
    },
    /// Create/update submission finished.
    SubmitFinished {
        epoch: u64,
        result: Result<(), ApiError>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
