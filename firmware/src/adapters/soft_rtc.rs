//! Software RTC.
//!
//! Keeps the last programmed time and date plus the instant they were
//! written, and advances a 12-hour clock with elapsed wall time. Used by
//! the host simulation and by boards without a battery-backed RTC.
//!
//! The date is held as programmed; it does not roll over at midnight.

use std::time::Instant;

use crate::app::clock::{DecimalPair, RtcDate, RtcTime};
use crate::app::ports::RtcPort;

const HALF_DAY_SECS: u64 = 12 * 3600;

pub struct SoftRtc {
    time: RtcTime,
    date: RtcDate,
    set_at: Instant,
}

impl SoftRtc {
    pub fn new(time: RtcTime, date: RtcDate) -> Self {
        Self {
            time,
            date,
            set_at: Instant::now(),
        }
    }

    fn now(&self) -> RtcTime {
        let hour = u64::from(self.time.hours.value() % 12);
        let base = hour * 3600
            + u64::from(self.time.minutes.value()) * 60
            + u64::from(self.time.seconds.value());
        let total = base + self.set_at.elapsed().as_secs();
        let flips = total / HALF_DAY_SECS;
        let secs = total % HALF_DAY_SECS;
        let hour = match (secs / 3600) as u8 {
            0 => 12,
            h => h,
        };
        RtcTime {
            hours: DecimalPair::from_value(hour),
            minutes: DecimalPair::from_value((secs / 60 % 60) as u8),
            seconds: DecimalPair::from_value((secs % 60) as u8),
            pm: self.time.pm ^ (flips % 2 == 1),
        }
    }
}

impl Default for SoftRtc {
    fn default() -> Self {
        Self::new(RtcTime::new(12, 0, 0, false), RtcDate::new(1, 1, 1, 0))
    }
}

impl RtcPort for SoftRtc {
    fn read_time(&mut self) -> RtcTime {
        self.now()
    }

    fn read_date(&mut self) -> RtcDate {
        self.date
    }

    fn write_time(&mut self, time: &RtcTime) {
        self.time = *time;
        self.set_at = Instant::now();
    }

    fn write_date(&mut self, date: &RtcDate) {
        self.date = *date;
    }
}
