//! Shared application state cell.
//!
//! The router reads the state to pick a dispatch target; subsystem tasks
//! write it on transitions. Both happen inside a critical section so no
//! reader can observe a state mid-transition.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use log::info;

use super::AppState;

/// Mutex-guarded holder of the single live [`AppState`].
pub struct StateCell {
    inner: Mutex<CriticalSectionRawMutex, Cell<AppState>>,
}

impl StateCell {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(AppState::MainMenu)),
        }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> AppState {
        self.inner.lock(Cell::get)
    }

    /// Replace the state and return the previous value.
    pub fn set(&self, next: AppState) -> AppState {
        let prev = self.inner.lock(|cell| cell.replace(next));
        if prev != next {
            info!("state: {} -> {}", prev.name(), next.name());
        }
        prev
    }
}

impl Default for StateCell {
    fn default() -> Self {
        Self::new()
    }
}
