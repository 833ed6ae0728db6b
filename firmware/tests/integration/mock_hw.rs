//! Mock hardware and a console rig for integration tests.
//!
//! The rig runs the real console tasks on an `edge-executor` against
//! mock pins and a mock RTC. A scenario is a future that types lines
//! into the receive path and reads what the tasks put on the print
//! queue, so every assertion sees the exact text an operator would.

use core::cell::RefCell;
use core::convert::Infallible;
use core::future::Future;
use core::time::Duration;

use cmdconsole::app::clock::{RtcDate, RtcTime};
use cmdconsole::app::ports::{RtcPort, SerialTx, SharedRtc};
use cmdconsole::config::{ConsoleConfig, LINE_TERMINATOR};
use cmdconsole::console::channels::Console;
use cmdconsole::console::tasks;
use cmdconsole::drivers::led_bank::LedBank;
use cmdconsole::drivers::led_patterns::EffectKind;
use cmdconsole::error::SerialError;
use cmdconsole::timers::{TimerId, TimerMux};
use edge_executor::LocalExecutor;
use embedded_hal::digital::{ErrorType, OutputPin};
use std::rc::Rc;

// ── Mock RTC ──────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockRtc {
    pub time: RtcTime,
    pub date: RtcDate,
    pub time_writes: u32,
    pub date_writes: u32,
}

impl MockRtc {
    /// 03:00:00 PM on 24-01-01.
    pub fn afternoon() -> Self {
        Self {
            time: RtcTime::new(3, 0, 0, true),
            date: RtcDate::new(1, 1, 2, 24),
            ..Default::default()
        }
    }
}

impl RtcPort for MockRtc {
    fn read_time(&mut self) -> RtcTime {
        self.time
    }

    fn read_date(&mut self) -> RtcDate {
        self.date
    }

    fn write_time(&mut self, time: &RtcTime) {
        self.time = *time;
        self.time_writes += 1;
    }

    fn write_date(&mut self, date: &RtcDate) {
        self.date = *date;
        self.date_writes += 1;
    }
}

// ── Mock LED pin ──────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        Ok(())
    }
}

// ── Recording serial transmitter ──────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingTx {
    pub sent: Rc<RefCell<Vec<String>>>,
}

impl SerialTx for RecordingTx {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        self.sent
            .borrow_mut()
            .push(String::from_utf8_lossy(bytes).into_owned());
        Ok(())
    }
}

// ── Console rig ───────────────────────────────────────────────

pub struct Rig {
    pub console: Console,
    pub timers: TimerMux,
    pub rtc: SharedRtc<MockRtc>,
    pub leds: RefCell<LedBank<MockPin>>,
}

#[allow(dead_code)]
impl Rig {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            console: Console::new(),
            timers: TimerMux::from_config(config).unwrap(),
            rtc: SharedRtc::new(MockRtc::afternoon()),
            leds: RefCell::new(LedBank::new(Default::default())),
        }
    }

    /// Fast timers so periodic behaviour shows up within a test.
    pub fn fast() -> Self {
        Self::new(&ConsoleConfig {
            led_effect_period_ms: 10,
            rtc_report_period_ms: 20,
        })
    }

    /// Feed `line` plus the terminator through the receive path.
    pub fn type_line(&self, line: &str) {
        for b in line.bytes() {
            self.console.on_rx_byte(b);
        }
        self.console.on_rx_byte(LINE_TERMINATOR);
    }

    pub async fn next_output(&self) -> String {
        self.console.print_queue.receive().await.as_str().to_owned()
    }

    /// Collect output up to and including the first message equal to
    /// `last`.
    pub async fn read_until(&self, last: &str) -> Vec<String> {
        let mut seen = Vec::new();
        loop {
            let msg = self.next_output().await;
            let done = msg == last;
            seen.push(msg);
            if done {
                return seen;
            }
        }
    }

    pub fn led_mask(&self) -> u8 {
        self.leds.borrow().mask()
    }

    /// Spawn every console task except the print task and drive
    /// `scenario` to completion. Panics if it does not finish in time.
    pub fn run<'a, F>(&'a self, scenario: F)
    where
        F: Future<Output = ()> + 'a,
    {
        let ex: LocalExecutor<'a, 16> = LocalExecutor::new();
        ex.spawn(tasks::command_task(&self.console)).detach();
        ex.spawn(tasks::menu_task(&self.console)).detach();
        ex.spawn(tasks::led_task(&self.console, &self.timers)).detach();
        ex.spawn(tasks::rtc_task(&self.console, &self.rtc, &self.timers))
            .detach();
        for id in TimerId::LEDS {
            let kind = EffectKind::from_slot(id.led_slot().unwrap()).unwrap();
            ex.spawn(tasks::led_effect_timer(self.timers.timer(id), kind, &self.leds))
                .detach();
        }
        ex.spawn(tasks::rtc_report_timer(
            &self.console,
            self.timers.timer(TimerId::RtcReport),
            &self.rtc,
        ))
        .detach();

        futures_lite::future::block_on(
            ex.run(futures_lite::future::or(scenario, deadline())),
        );
    }
}

async fn deadline() {
    async_io_mini::Timer::after(Duration::from_secs(5)).await;
    panic!("scenario did not finish within 5 s");
}

pub async fn sleep_ms(ms: u64) {
    async_io_mini::Timer::after(Duration::from_millis(ms)).await;
}
