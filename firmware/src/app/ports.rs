//! Port traits: the boundary between console logic and the hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ console tasks (domain)
//! ```
//!
//! Board adapters (RTC block, UART transmit, timer service) implement
//! these traits. The subsystem tasks consume them via generics, so the
//! domain code never touches registers directly and the integration
//! tests can swap in mocks.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use super::clock::{RtcDate, RtcTime};
use crate::error::SerialError;
use crate::timers::TimerId;

// ───────────────────────────────────────────────────────────────
// RTC port (driven adapter: domain ↔ RTC peripheral)
// ───────────────────────────────────────────────────────────────

/// Calendar register access.
pub trait RtcPort {
    /// Current time, synchronised with the calendar shadow registers.
    fn read_time(&mut self) -> RtcTime;

    fn read_date(&mut self) -> RtcDate;

    /// Program the time registers. Callers validate first.
    fn write_time(&mut self, time: &RtcTime);

    fn write_date(&mut self, date: &RtcDate);
}

// ───────────────────────────────────────────────────────────────
// Timer port (driven adapter: domain → timer service)
// ───────────────────────────────────────────────────────────────

/// Start/stop control over the identified periodic timers.
///
/// `stop` must be complete when it returns: the timer's callback may not
/// fire again until the next `start`.
pub trait TimerPort {
    fn start(&self, id: TimerId);

    fn stop(&self, id: TimerId);

    fn is_active(&self, id: TimerId) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Serial transmit port (driven adapter: domain → UART)
// ───────────────────────────────────────────────────────────────

/// Blocking transmit of one complete message.
pub trait SerialTx {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), SerialError>;
}

// ───────────────────────────────────────────────────────────────
// Shared RTC handle
// ───────────────────────────────────────────────────────────────

/// An RTC adapter shared by the RTC task and the report timer.
///
/// Each port call runs inside one critical section, so a snapshot read
/// never interleaves with a commit.
pub struct SharedRtc<R> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<R>>,
}

impl<R> SharedRtc<R> {
    pub const fn new(rtc: R) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(rtc)),
        }
    }

    /// Run `f` with exclusive access to the adapter.
    pub fn with<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

impl<R: RtcPort> RtcPort for &SharedRtc<R> {
    fn read_time(&mut self) -> RtcTime {
        self.with(|rtc| rtc.read_time())
    }

    fn read_date(&mut self) -> RtcDate {
        self.with(|rtc| rtc.read_date())
    }

    fn write_time(&mut self, time: &RtcTime) {
        self.with(|rtc| rtc.write_time(time))
    }

    fn write_date(&mut self, date: &RtcDate) {
        self.with(|rtc| rtc.write_date(date))
    }
}
