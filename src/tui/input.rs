//! Keyboard-polling thread
//!
//! Reads crossterm key events and forwards them over a channel so the
//! simulation loop never blocks on the terminal. The thread polls with a
//! timeout and exits once the shutdown flag is raised or the receiving
//! side goes away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub fn spawn_key_poller(shutdown: Arc<AtomicBool>) -> Receiver<KeyCode> {
    let (tx, rx) = unbounded();

    thread::spawn(move || {
        while !shutdown.load(Ordering::SeqCst) {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => {
                    if let Ok(Event::Key(key)) = event::read() {
                        if key.kind == KeyEventKind::Release {
                            continue;
                        }
                        if tx.send(key.code).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });

    rx
}
