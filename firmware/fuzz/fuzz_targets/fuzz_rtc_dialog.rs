//! Fuzz target: `RtcConsole::handle`
//!
//! Feeds arbitrary command lines through the RTC menu and dialogs and
//! asserts that nothing out of range is ever committed to the RTC.
//!
//! cargo fuzz run fuzz_rtc_dialog

#![no_main]

use cmdconsole::app::clock::{RtcDate, RtcTime};
use cmdconsole::app::commands::Command;
use cmdconsole::app::messages::Outbox;
use cmdconsole::app::ports::RtcPort;
use cmdconsole::app::rtc::RtcConsole;
use cmdconsole::fsm::AppState;
use cmdconsole::timers::TimerMux;
use libfuzzer_sys::fuzz_target;

#[derive(Default)]
struct CheckedRtc {
    time: RtcTime,
    date: RtcDate,
}

impl RtcPort for CheckedRtc {
    fn read_time(&mut self) -> RtcTime {
        self.time
    }

    fn read_date(&mut self) -> RtcDate {
        self.date
    }

    fn write_time(&mut self, time: &RtcTime) {
        assert!(time.validate().is_ok(), "committed invalid time {time:?}");
        self.time = *time;
    }

    fn write_date(&mut self, date: &RtcDate) {
        assert!(date.validate().is_ok(), "committed invalid date {date:?}");
        self.date = *date;
    }
}

fuzz_target!(|data: &[u8]| {
    let mut rtc = CheckedRtc::default();
    let timers = TimerMux::default();
    let mut console = RtcConsole::new();
    let mut state = AppState::RtcMenu;

    for line in data.split(|b| *b == b'\r') {
        let mut out = Outbox::new();
        state = console.handle(state, &Command::new(line), &mut rtc, &timers, &mut out);
        if state == AppState::MainMenu {
            state = AppState::RtcMenu;
        }
    }
});
