//! Unified error types for the console firmware.
//!
//! `Error` covers startup: board bring-up, configuration and task
//! wiring. Runtime failures have their own small enums (`RtcError` for
//! operator entries, `SerialError` for the output path) that the tasks
//! log and recover from. All of them are `Copy`.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Startup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral or task initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// RTC entry errors
// ---------------------------------------------------------------------------

/// Which calendar field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcField {
    Hour,
    Minute,
    Second,
    Date,
    Month,
    Weekday,
    Year,
}

impl fmt::Display for RtcField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Date => "date",
            Self::Month => "month",
            Self::Weekday => "weekday",
            Self::Year => "year",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcError {
    /// The command was not a one- or two-digit decimal number.
    InvalidNumber,
    /// The number parsed but exceeds the field's limit.
    OutOfRange(RtcField),
}

impl fmt::Display for RtcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber => write!(f, "not a 1-2 digit number"),
            Self::OutOfRange(field) => write!(f, "{field} out of range"),
        }
    }
}

// ---------------------------------------------------------------------------
// Serial errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// The transmit primitive reported a failure.
    TransmitFailed,
    /// The print queue had no room for a message.
    QueueFull,
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransmitFailed => write!(f, "transmit failed"),
            Self::QueueFull => write!(f, "print queue full"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
