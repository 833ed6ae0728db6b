//! Outbound console text.
//!
//! Menus and prompts are fixed `&'static str`s; formatted lines (clock
//! snapshots) are rendered into a bounded [`heapless::String`]. Either
//! way a [`Message`] is moved through the print queue by value, so no
//! task ever hands out a pointer into its own scratch buffer.

use core::fmt::{self, Write};

use heapless::{String, Vec};
use log::warn;

/// Longest formatted line (the time snapshot is 34 bytes).
pub const LINE_CAP: usize = 48;

/// Most messages a single command can produce (RTC menu entry: header,
/// two snapshot lines, option list).
pub const OUTBOX_CAP: usize = 6;

pub const MSG_MAIN_MENU: &str = "\n========================\n\
                                 |         Menu         |\n\
                                 ========================\n\
                                 LED effect    ----> 0\n\
                                 Date and time ----> 1\n\
                                 Exit          ----> 2\n\
                                 Enter your choice here : ";

pub const MSG_LED_MENU: &str = "========================\n\
                                |      LED Effect     |\n\
                                ========================\n\
                                (none,e1,e2,e3,e4)\n\
                                Enter your choice here : ";

pub const MSG_RTC_HEADER: &str = "========================\n\
                                  |         RTC          |\n\
                                  ========================\n";

pub const MSG_RTC_OPTIONS: &str = "Configure Time            ----> 0\n\
                                   Configure Date            ----> 1\n\
                                   Enable reporting          ----> 2\n\
                                   Exit                      ----> 3\n\
                                   Enter your choice here : ";

pub const MSG_REPORT_PROMPT: &str = "Enable time&date reporting(y/n)?: ";

pub const MSG_CONFIG_OK: &str = "Configuration successful\n";

pub const MSG_INVALID: &str = "Invalid option\n";

/// One unit of output handed to the print task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Static(&'static str),
    Line(String<LINE_CAP>),
}

impl Message {
    /// Render formatted text into a bounded line. Text past
    /// [`LINE_CAP`] is cut off.
    pub fn format(args: fmt::Arguments<'_>) -> Self {
        let mut line = String::new();
        if line.write_fmt(args).is_err() {
            warn!("print: line truncated at {} bytes", LINE_CAP);
        }
        Self::Line(line)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Line(s) => s.as_str(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }
}

impl From<&'static str> for Message {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

/// Messages produced while handling one command, flushed in order to
/// the print queue afterwards.
#[derive(Debug, Default)]
pub struct Outbox {
    messages: Vec<Message, OUTBOX_CAP>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, msg: impl Into<Message>) {
        if self.messages.push(msg.into()).is_err() {
            warn!("print: outbox full, message dropped");
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }
}

impl IntoIterator for Outbox {
    type Item = Message;
    type IntoIter = <Vec<Message, OUTBOX_CAP> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
