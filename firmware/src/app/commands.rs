//! Inbound console commands.
//!
//! A [`Command`] is one assembled serial line with the terminator
//! stripped. The router hands it to exactly one subsystem task, which
//! consumes it and drops it.

use heapless::Vec;

use crate::config::PAYLOAD_CAP;

/// One line of operator input, at most [`PAYLOAD_CAP`] bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    payload: Vec<u8, PAYLOAD_CAP>,
}

impl Command {
    /// Build a command from raw line bytes, keeping the earliest
    /// [`PAYLOAD_CAP`] bytes.
    pub fn new(bytes: &[u8]) -> Self {
        let keep = bytes.len().min(PAYLOAD_CAP);
        let mut payload = Vec::new();
        // Cannot fail: `keep` never exceeds the capacity.
        let _ = payload.extend_from_slice(&bytes[..keep]);
        Self { payload }
    }

    pub(crate) fn from_payload(payload: Vec<u8, PAYLOAD_CAP>) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Byte count, terminator excluded.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// The value of a single-digit command (`"0"`..`"9"`).
    pub fn digit(&self) -> Option<u8> {
        match self.payload.as_slice() {
            [b @ b'0'..=b'9'] => Some(b - b'0'),
            _ => None,
        }
    }

    /// The single byte of a one-character command.
    pub fn single_char(&self) -> Option<u8> {
        match self.payload.as_slice() {
            [b] => Some(*b),
            _ => None,
        }
    }
}
