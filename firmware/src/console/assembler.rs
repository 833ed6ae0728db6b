//! Line assembly from the byte queue.
//!
//! A pass drains the queue without blocking until it meets a terminator
//! or the queue runs dry, and is bounded by the queue capacity even if
//! the interrupt keeps producing. A line that is still open when the
//! queue empties stays in the assembler and is continued by the next
//! pass.
//!
//! Truncation: the earliest [`PAYLOAD_CAP`] bytes of a line are kept;
//! later bytes are discarded up to the terminator.

use heapless::Vec;
use log::debug;

use super::ingest::ByteQueue;
use crate::app::commands::Command;
use crate::config::{BYTE_QUEUE_CAP, LINE_TERMINATOR, PAYLOAD_CAP};

/// Result of one drain pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assembly {
    Complete(Command),
    /// No terminator yet; wait for the next wake.
    Incomplete,
}

#[derive(Debug, Default)]
pub struct CommandAssembler {
    line: Vec<u8, PAYLOAD_CAP>,
    discarded: usize,
}

impl CommandAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of the open line retained so far.
    pub fn pending(&self) -> &[u8] {
        &self.line
    }

    /// One bounded, non-blocking drain pass.
    pub fn pass(&mut self, queue: &ByteQueue) -> Assembly {
        for _ in 0..BYTE_QUEUE_CAP {
            let Some(byte) = queue.pop() else { break };
            if byte == LINE_TERMINATOR {
                if self.discarded > 0 {
                    debug!(
                        "assembler: line truncated, {} bytes discarded",
                        self.discarded
                    );
                }
                self.discarded = 0;
                let line = core::mem::take(&mut self.line);
                return Assembly::Complete(Command::from_payload(line));
            }
            if self.line.push(byte).is_err() {
                self.discarded += 1;
            }
        }
        debug!("assembler: incomplete line ({} bytes held)", self.line.len());
        Assembly::Incomplete
    }
}
