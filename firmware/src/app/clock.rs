//! Calendar values as held by the RTC peripheral.
//!
//! Every field is a tens/units decimal pair, the layout the RTC block
//! uses internally. Operator entries are parsed into a plain number,
//! split into a pair, and validated as a whole record before commit.

use core::fmt;

use crate::error::{RtcError, RtcField};

use super::messages::Message;

/// Two decimal digits of one calendar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecimalPair {
    pub tens: u8,
    pub units: u8,
}

impl DecimalPair {
    /// Split a value in `0..=99` into digits.
    pub const fn from_value(value: u8) -> Self {
        Self {
            tens: value / 10,
            units: value % 10,
        }
    }

    pub const fn value(self) -> u8 {
        self.tens * 10 + self.units
    }
}

impl fmt::Display for DecimalPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tens, self.units)
    }
}

/// 12-hour wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RtcTime {
    pub hours: DecimalPair,
    pub minutes: DecimalPair,
    pub seconds: DecimalPair,
    pub pm: bool,
}

impl RtcTime {
    pub const fn new(hours: u8, minutes: u8, seconds: u8, pm: bool) -> Self {
        Self {
            hours: DecimalPair::from_value(hours),
            minutes: DecimalPair::from_value(minutes),
            seconds: DecimalPair::from_value(seconds),
            pm,
        }
    }

    pub fn validate(&self) -> Result<(), RtcError> {
        if self.hours.value() > 12 {
            return Err(RtcError::OutOfRange(RtcField::Hour));
        }
        if self.minutes.value() > 59 {
            return Err(RtcError::OutOfRange(RtcField::Minute));
        }
        if self.seconds.value() > 59 {
            return Err(RtcError::OutOfRange(RtcField::Second));
        }
        Ok(())
    }
}

/// Renders as `HH:MM:SS [AM]` / `HH:MM:SS [PM]`.
impl fmt::Display for RtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridiem = if self.pm { "PM" } else { "AM" };
        write!(
            f,
            "{}:{}:{} [{}]",
            self.hours, self.minutes, self.seconds, meridiem
        )
    }
}

/// Calendar date; `weekday` runs 1 (Sunday) to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RtcDate {
    pub date: DecimalPair,
    pub month: DecimalPair,
    pub year: DecimalPair,
    pub weekday: u8,
}

impl RtcDate {
    pub const fn new(date: u8, month: u8, weekday: u8, year: u8) -> Self {
        Self {
            date: DecimalPair::from_value(date),
            month: DecimalPair::from_value(month),
            year: DecimalPair::from_value(year),
            weekday,
        }
    }

    pub fn validate(&self) -> Result<(), RtcError> {
        if self.year.value() > 99 {
            return Err(RtcError::OutOfRange(RtcField::Year));
        }
        if self.month.value() > 12 {
            return Err(RtcError::OutOfRange(RtcField::Month));
        }
        if self.date.value() > 31 {
            return Err(RtcError::OutOfRange(RtcField::Date));
        }
        if self.weekday > 7 {
            return Err(RtcError::OutOfRange(RtcField::Weekday));
        }
        Ok(())
    }
}

/// Renders as `YY-MM-DD`.
impl fmt::Display for RtcDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.date)
    }
}

/// Parse a one- or two-digit decimal entry.
pub fn parse_number(text: &[u8]) -> Result<u8, RtcError> {
    let digit = |b: u8| match b {
        b'0'..=b'9' => Ok(b - b'0'),
        _ => Err(RtcError::InvalidNumber),
    };
    match *text {
        [units] => digit(units),
        [tens, units] => Ok(digit(tens)? * 10 + digit(units)?),
        _ => Err(RtcError::InvalidNumber),
    }
}

/// The two-line "current time & date" report.
pub fn snapshot(time: &RtcTime, date: &RtcDate) -> [Message; 2] {
    [
        Message::format(format_args!("\nCurrent Time&Date:\t{time}\n")),
        Message::format(format_args!("{date}\n")),
    ]
}
