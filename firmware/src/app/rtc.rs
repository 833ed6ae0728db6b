//! RTC menu and its configuration dialogs.
//!
//! [`RtcConsole`] holds the dialog cursors and the half-entered values
//! between command deliveries. Each call to [`RtcConsole::handle`]
//! consumes one command in one of the four RTC states and returns the
//! state the console moves to next.

use log::{info, warn};

use super::clock::{self, DecimalPair, RtcDate, RtcTime, parse_number};
use super::commands::Command;
use super::messages::{
    MSG_CONFIG_OK, MSG_INVALID, MSG_REPORT_PROMPT, MSG_RTC_HEADER, MSG_RTC_OPTIONS, Outbox,
};
use super::ports::{RtcPort, TimerPort};
use crate::error::RtcError;
use crate::fsm::AppState;
use crate::fsm::dialog::{DateStage, TimeStage};
use crate::timers::TimerId;

/// Dialog state of the RTC subsystem.
#[derive(Debug, Default)]
pub struct RtcConsole {
    time_stage: TimeStage,
    date_stage: DateStage,
    pending_time: RtcTime,
    pending_date: RtcDate,
}

impl RtcConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time_stage(&self) -> TimeStage {
        self.time_stage
    }

    pub fn date_stage(&self) -> DateStage {
        self.date_stage
    }

    /// Entry from the main menu: header, current time and date, options.
    pub fn enter<R: RtcPort>(&mut self, rtc: &mut R, out: &mut Outbox) {
        self.reset();
        out.push(MSG_RTC_HEADER);
        push_snapshot(rtc, out);
        out.push(MSG_RTC_OPTIONS);
    }

    /// Consume one command received in `state`.
    pub fn handle<R: RtcPort, T: TimerPort + ?Sized>(
        &mut self,
        state: AppState,
        cmd: &Command,
        rtc: &mut R,
        timers: &T,
        out: &mut Outbox,
    ) -> AppState {
        match state {
            AppState::RtcMenu => self.menu(cmd, out),
            AppState::RtcTimeConfig => self.time_entry(cmd, rtc, out),
            AppState::RtcDateConfig => self.date_entry(cmd, rtc, out),
            AppState::RtcReport => report_toggle(cmd, timers, out),
            AppState::MainMenu | AppState::LedEffect => {
                warn!("rtc: command in foreign state {}", state.name());
                AppState::MainMenu
            }
        }
    }

    fn reset(&mut self) {
        self.time_stage = TimeStage::default();
        self.date_stage = DateStage::default();
    }

    fn menu(&mut self, cmd: &Command, out: &mut Outbox) -> AppState {
        match cmd.digit() {
            Some(0) => {
                self.time_stage = TimeStage::default();
                out.push(self.time_stage.prompt());
                AppState::RtcTimeConfig
            }
            Some(1) => {
                self.date_stage = DateStage::default();
                out.push(self.date_stage.prompt());
                AppState::RtcDateConfig
            }
            Some(2) => {
                out.push(MSG_REPORT_PROMPT);
                AppState::RtcReport
            }
            Some(3) => AppState::MainMenu,
            _ => {
                out.push(MSG_INVALID);
                out.push(MSG_RTC_OPTIONS);
                AppState::RtcMenu
            }
        }
    }

    fn time_entry<R: RtcPort>(&mut self, cmd: &Command, rtc: &mut R, out: &mut Outbox) -> AppState {
        let value = match parse_number(cmd.payload()) {
            Ok(v) => v,
            Err(e) => return self.abort(e, out),
        };
        let pair = DecimalPair::from_value(value);
        match self.time_stage {
            TimeStage::Hour => self.pending_time.hours = pair,
            TimeStage::Minute => self.pending_time.minutes = pair,
            TimeStage::Second => self.pending_time.seconds = pair,
        }
        if let Some(next) = self.time_stage.next() {
            self.time_stage = next;
            out.push(next.prompt());
            return AppState::RtcTimeConfig;
        }

        // No meridiem stage: keep whatever half of the day the RTC is in.
        self.pending_time.pm = rtc.read_time().pm;
        match self.pending_time.validate() {
            Ok(()) => {
                rtc.write_time(&self.pending_time);
                info!("rtc: time set to {}", self.pending_time);
                out.push(MSG_CONFIG_OK);
                push_snapshot(rtc, out);
            }
            Err(e) => {
                warn!("rtc: time rejected: {}", e);
                out.push(MSG_INVALID);
            }
        }
        self.reset();
        AppState::MainMenu
    }

    fn date_entry<R: RtcPort>(&mut self, cmd: &Command, rtc: &mut R, out: &mut Outbox) -> AppState {
        let value = match parse_number(cmd.payload()) {
            Ok(v) => v,
            Err(e) => return self.abort(e, out),
        };
        match self.date_stage {
            DateStage::Date => self.pending_date.date = DecimalPair::from_value(value),
            DateStage::Month => self.pending_date.month = DecimalPair::from_value(value),
            DateStage::Weekday => self.pending_date.weekday = value,
            DateStage::Year => self.pending_date.year = DecimalPair::from_value(value),
        }
        if let Some(next) = self.date_stage.next() {
            self.date_stage = next;
            out.push(next.prompt());
            return AppState::RtcDateConfig;
        }

        match self.pending_date.validate() {
            Ok(()) => {
                rtc.write_date(&self.pending_date);
                info!("rtc: date set to {}", self.pending_date);
                out.push(MSG_CONFIG_OK);
                push_snapshot(rtc, out);
            }
            Err(e) => {
                warn!("rtc: date rejected: {}", e);
                out.push(MSG_INVALID);
            }
        }
        self.reset();
        AppState::MainMenu
    }

    fn abort(&mut self, e: RtcError, out: &mut Outbox) -> AppState {
        warn!("rtc: dialog aborted: {}", e);
        out.push(MSG_INVALID);
        self.reset();
        AppState::MainMenu
    }
}

fn report_toggle<T: TimerPort + ?Sized>(cmd: &Command, timers: &T, out: &mut Outbox) -> AppState {
    match cmd.single_char() {
        Some(b'y') => {
            if !timers.is_active(TimerId::RtcReport) {
                timers.start(TimerId::RtcReport);
                info!("rtc: reporting enabled");
            }
        }
        Some(b'n') => {
            timers.stop(TimerId::RtcReport);
            info!("rtc: reporting disabled");
        }
        _ => out.push(MSG_INVALID),
    }
    AppState::MainMenu
}

fn push_snapshot<R: RtcPort>(rtc: &mut R, out: &mut Outbox) {
    let time = rtc.read_time();
    let date = rtc.read_date();
    for line in clock::snapshot(&time, &date) {
        out.push(line);
    }
}
