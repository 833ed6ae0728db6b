//! Interrupt-side byte capture.
//!
//! The receive interrupt hands every byte to [`Console::on_rx_byte`]. It
//! runs entirely inside one short critical section, never blocks, never
//! allocates and never logs.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use heapless::Deque;

use super::channels::Console;
use crate::config::{BYTE_QUEUE_CAP, LINE_TERMINATOR};

/// What the ingest policy did with one received byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Queued,
    /// The queue was full and the byte was a terminator; the oldest byte
    /// (carried here) was evicted to make room.
    QueuedEvicting(u8),
    /// The queue was full; the byte was discarded.
    Dropped,
}

/// Bounded FIFO between the receive interrupt and the assembler.
pub struct ByteQueue {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Deque<u8, BYTE_QUEUE_CAP>>>,
}

impl ByteQueue {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Apply the admission policy to one byte.
    ///
    /// A terminator is always admitted, evicting the oldest byte if
    /// needed, so a full queue can still complete a line.
    pub fn admit(&self, byte: u8) -> Admission {
        self.inner.lock(|q| {
            let mut q = q.borrow_mut();
            if q.push_back(byte).is_ok() {
                return Admission::Queued;
            }
            if byte != LINE_TERMINATOR {
                return Admission::Dropped;
            }
            match q.pop_front() {
                Some(evicted) => {
                    // Cannot fail: one slot was just freed.
                    let _ = q.push_back(byte);
                    Admission::QueuedEvicting(evicted)
                }
                None => Admission::Dropped,
            }
        })
    }

    pub fn pop(&self) -> Option<u8> {
        self.inner.lock(|q| q.borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        self.inner.lock(|q| q.borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.inner.lock(|q| q.borrow().is_full())
    }
}

impl Default for ByteQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Receive-interrupt entry point: queue one byte and, when a
    /// terminator got in, wake the assembler. Repeated wakes before the
    /// assembler runs coalesce into one.
    ///
    /// The adapter re-arms the next single-byte receive after this
    /// returns.
    pub fn on_rx_byte(&self, byte: u8) -> Admission {
        let admission = self.rx.admit(byte);
        if byte == LINE_TERMINATOR && admission != Admission::Dropped {
            self.line_ready.signal(());
        }
        admission
    }
}
