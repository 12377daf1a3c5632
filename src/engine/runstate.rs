/// Run/pause control shared between the external panel and the engine.
///
/// The engine never reads the flags mid-decision; it takes one immutable
/// `RunState` snapshot at the top of each tick.
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    pub is_running: bool,
    pub is_paused: bool,
}

impl RunState {
    pub fn should_tick(&self) -> bool {
        self.is_running && !self.is_paused
    }
}

#[derive(Debug, Default)]
pub struct RunControl {
    running: AtomicBool,
    paused: AtomicBool,
}

impl RunControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) {
        self.running.store(true, Ordering::SeqCst);
        self.paused.store(false, Ordering::SeqCst);
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.paused.store(false, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> RunState {
        RunState {
            is_running: self.running.load(Ordering::SeqCst),
            is_paused: self.paused.load(Ordering::SeqCst),
        }
    }
}
