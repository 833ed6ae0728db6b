//! LED effect selection.
//!
//! Exactly one LED slot may run at a time. Every selection stops all
//! four slots before starting the requested one, and `TimerPort::stop`
//! is complete on return, so two effects never overlap.

use log::info;

use super::commands::Command;
use super::messages::{MSG_INVALID, Outbox};
use super::ports::TimerPort;
use crate::timers::TimerId;

/// Longest accepted LED command (`none`).
pub const LED_CMD_MAX: usize = 4;

/// Outcome of one LED menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedSelection {
    Stopped,
    Started(TimerId),
    Invalid,
}

fn parse(cmd: &Command) -> Option<Option<TimerId>> {
    if cmd.len() > LED_CMD_MAX {
        return None;
    }
    match cmd.payload() {
        b"none" => Some(None),
        [b'e', n] => TimerId::led(n.wrapping_sub(b'0')).map(Some),
        _ => None,
    }
}

pub fn stop_all<T: TimerPort + ?Sized>(timers: &T) {
    for id in TimerId::LEDS {
        timers.stop(id);
    }
}

/// Apply one LED menu command to the timer set.
///
/// `none` stops every slot; `e1`..`e4` stops every slot and then starts
/// the matching one. Anything else leaves the timers untouched.
pub fn apply_command<T: TimerPort + ?Sized>(
    cmd: &Command,
    timers: &T,
    out: &mut Outbox,
) -> LedSelection {
    match parse(cmd) {
        Some(None) => {
            stop_all(timers);
            info!("led: effects stopped");
            LedSelection::Stopped
        }
        Some(Some(id)) => {
            stop_all(timers);
            timers.start(id);
            info!("led: {:?} started", id);
            LedSelection::Started(id)
        }
        None => {
            out.push(MSG_INVALID);
            LedSelection::Invalid
        }
    }
}
