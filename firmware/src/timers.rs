//! Periodic soft timers.
//!
//! Five independently identified repeating timers share one mechanism:
//! four LED-effect slots and the RTC report timer. Each timer is driven
//! by its own future ([`run_timer`]) that owns the per-timer callback and
//! its state, so there is no identity switch at fire time.
//!
//! ```text
//!   start(id) ──▶ active=1, re-arm ─┐
//!                                   ▼
//!   run_timer:  idle ──armed──▶ sleep(period) ──▶ fire ──┐
//!                ▲                  │ re-armed           │
//!                └── stop(id) ◀─────┴────────────────────┘
//! ```
//!
//! `stop` clears the active flag before returning; a firing already in
//! its sleep re-checks the flag on wake, so no callback runs after stop.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use core::time::Duration;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use futures_lite::future;
use log::debug;

use crate::app::ports::TimerPort;
use crate::config::ConsoleConfig;
use crate::error::Result;

/// Identity of one timer in the mux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    Led1,
    Led2,
    Led3,
    Led4,
    RtcReport,
}

impl TimerId {
    pub const COUNT: usize = 5;

    pub const LEDS: [TimerId; 4] = [Self::Led1, Self::Led2, Self::Led3, Self::Led4];

    /// LED slot `1..=4` to its timer.
    pub const fn led(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(Self::Led1),
            2 => Some(Self::Led2),
            3 => Some(Self::Led3),
            4 => Some(Self::Led4),
            _ => None,
        }
    }

    pub const fn led_slot(self) -> Option<u8> {
        match self {
            Self::Led1 => Some(1),
            Self::Led2 => Some(2),
            Self::Led3 => Some(3),
            Self::Led4 => Some(4),
            Self::RtcReport => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Single timer
// ---------------------------------------------------------------------------

pub struct SoftTimer {
    period_ms: AtomicU32,
    active: AtomicBool,
    armed: Signal<CriticalSectionRawMutex, ()>,
}

impl SoftTimer {
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms: AtomicU32::new(period_ms),
            active: AtomicBool::new(false),
            armed: Signal::new(),
        }
    }

    /// Activate the timer; the first firing comes one full period later.
    /// Starting an active timer restarts its period.
    pub fn start(&self) {
        self.active.store(true, Ordering::Release);
        self.armed.signal(());
    }

    pub fn stop(&self) {
        if self.active.swap(false, Ordering::AcqRel) {
            self.armed.signal(());
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(u64::from(self.period_ms.load(Ordering::Relaxed)))
    }
}

/// Drive one timer forever, calling `on_fire` once per elapsed period
/// while the timer is active.
pub async fn run_timer<F: FnMut()>(timer: &SoftTimer, mut on_fire: F) {
    loop {
        if !timer.is_active() {
            timer.armed.wait().await;
            continue;
        }
        let period = timer.period();
        let rearmed = future::or(
            async {
                async_io_mini::Timer::after(period).await;
                false
            },
            async {
                timer.armed.wait().await;
                true
            },
        )
        .await;
        if !rearmed && timer.is_active() {
            on_fire();
        }
    }
}

// ---------------------------------------------------------------------------
// Timer mux
// ---------------------------------------------------------------------------

/// The fixed set of console timers.
pub struct TimerMux {
    timers: [SoftTimer; TimerId::COUNT],
}

impl TimerMux {
    pub const fn new(led_period_ms: u32, report_period_ms: u32) -> Self {
        Self {
            timers: [
                SoftTimer::new(led_period_ms),
                SoftTimer::new(led_period_ms),
                SoftTimer::new(led_period_ms),
                SoftTimer::new(led_period_ms),
                SoftTimer::new(report_period_ms),
            ],
        }
    }

    pub fn from_config(config: &ConsoleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            config.led_effect_period_ms,
            config.rtc_report_period_ms,
        ))
    }

    pub fn timer(&self, id: TimerId) -> &SoftTimer {
        &self.timers[id.index()]
    }

    /// LED slots currently running.
    pub fn active_leds(&self) -> impl Iterator<Item = TimerId> + '_ {
        TimerId::LEDS
            .into_iter()
            .filter(|id| self.timer(*id).is_active())
    }
}

impl Default for TimerMux {
    fn default() -> Self {
        let config = ConsoleConfig::default();
        Self::new(config.led_effect_period_ms, config.rtc_report_period_ms)
    }
}

impl TimerPort for TimerMux {
    fn start(&self, id: TimerId) {
        debug!("timer: start {:?}", id);
        self.timer(id).start();
    }

    fn stop(&self, id: TimerId) {
        debug!("timer: stop {:?}", id);
        self.timer(id).stop();
    }

    fn is_active(&self, id: TimerId) -> bool {
        self.timer(id).is_active()
    }
}
