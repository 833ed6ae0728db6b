//! Console inter-task communication.
//!
//! One [`Console`] value holds every hand-off point between the receive
//! interrupt, the assembler, the router, the subsystem tasks and the
//! print task. It is `const`-constructible so a board can place it in a
//! `static`, and it is passed to every task by reference.
//!
//! ```text
//!  ISR ─▶ rx ─▶ line_ready ─▶ assembler ─▶ Router ─┬─▶ menu_inbox
//!                                                   ├─▶ led_inbox
//!                                                   └─▶ rtc_inbox
//!
//!  menu ──led_enter / rtc_enter──▶ led / rtc ──menu_return──▶ menu
//!
//!  every task ─▶ print_queue ─▶ print task ─▶ transmit
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use super::ingest::ByteQueue;
use super::router::Router;
use crate::app::commands::Command;
use crate::app::messages::{Message, Outbox};
use crate::config::PRINT_QUEUE_DEPTH;
use crate::error::SerialError;
use crate::fsm::context::StateCell;

/// Single-slot wake; repeated signals before a wait coalesce.
pub type Wake = Signal<CriticalSectionRawMutex, ()>;

/// Last-value-wins command slot of one subsystem task.
pub type Inbox = Signal<CriticalSectionRawMutex, Command>;

pub type PrintQueue = Channel<CriticalSectionRawMutex, Message, PRINT_QUEUE_DEPTH>;

pub struct Console {
    /// Live application state.
    pub state: StateCell,
    /// Receive bytes, interrupt → assembler.
    pub rx: ByteQueue,
    /// A terminator reached `rx`.
    pub line_ready: Wake,
    pub menu_inbox: Inbox,
    pub led_inbox: Inbox,
    pub rtc_inbox: Inbox,
    /// Menu hands control to the LED task.
    pub led_enter: Wake,
    /// Menu hands control to the RTC task.
    pub rtc_enter: Wake,
    /// A subsystem finished and the menu should resume.
    pub menu_return: Wake,
    pub print_queue: PrintQueue,
}

impl Console {
    pub const fn new() -> Self {
        Self {
            state: StateCell::new(),
            rx: ByteQueue::new(),
            line_ready: Signal::new(),
            menu_inbox: Signal::new(),
            led_inbox: Signal::new(),
            rtc_inbox: Signal::new(),
            led_enter: Signal::new(),
            rtc_enter: Signal::new(),
            menu_return: Signal::new(),
            print_queue: Channel::new(),
        }
    }

    pub fn router(&self) -> Router<'_> {
        Router::new(&self.state, &self.menu_inbox, &self.led_inbox, &self.rtc_inbox)
    }

    /// Queue one message, waiting for room.
    pub async fn print(&self, msg: impl Into<Message>) {
        self.print_queue.send(msg.into()).await;
    }

    /// Queue every message of `out` in order.
    pub async fn flush(&self, out: Outbox) {
        for msg in out {
            self.print_queue.send(msg).await;
        }
    }

    /// Queue without waiting; for timer callbacks, which must not block.
    /// A full queue drops `msg`.
    pub fn try_print(&self, msg: impl Into<Message>) -> Result<(), SerialError> {
        self.print_queue
            .try_send(msg.into())
            .map_err(|_| SerialError::QueueFull)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
