//! Multi-step entry cursors.
//!
//! Each RTC configuration dialog spans several command deliveries. The
//! cursor remembers which field the next command fills; it returns to the
//! first stage when the dialog commits or aborts.

/// Time entry: hour → minute → second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeStage {
    #[default]
    Hour,
    Minute,
    Second,
}

impl TimeStage {
    /// Stage after this one; `None` once the last field is filled.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Hour => Some(Self::Minute),
            Self::Minute => Some(Self::Second),
            Self::Second => None,
        }
    }

    /// Operator prompt for this stage.
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Hour => "Enter hour(1-12):",
            Self::Minute => "Enter minutes(0-59):",
            Self::Second => "Enter seconds(0-59):",
        }
    }
}

/// Date entry: date → month → weekday → year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStage {
    #[default]
    Date,
    Month,
    Weekday,
    Year,
}

impl DateStage {
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Date => Some(Self::Month),
            Self::Month => Some(Self::Weekday),
            Self::Weekday => Some(Self::Year),
            Self::Year => None,
        }
    }

    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Date => "Enter date(1-31):",
            Self::Month => "Enter month(1-12):",
            Self::Weekday => "Enter day(1-7 sun:1):",
            Self::Year => "Enter year(0-99):",
        }
    }
}
