//! Console tasks.
//!
//! Every task is a plain `async fn` borrowing the shared [`Console`] and
//! whatever ports it needs, so a board can run them on any executor.
//! Each one suspends only at "wait for the next input, wake or timer".
//!
//! ```text
//!  command_task ─▶ Router ─┬─▶ menu_task ─┬─▶ led_task ─┐
//!                          │              └─▶ rtc_task ─┤
//!                          └──────────────────────────◀─┘ menu_return
//!
//!  led_effect_timer ×4 ─▶ LedBank        rtc_report_timer ─▶ print_queue
//!  print_task: print_queue ─▶ SerialTx
//! ```

use core::cell::RefCell;

use embedded_hal::digital::OutputPin;
use futures_lite::future;
use log::{info, warn};

use super::assembler::{Assembly, CommandAssembler};
use super::channels::Console;
use crate::app::clock;
use crate::app::led;
use crate::app::menu::MenuChoice;
use crate::app::messages::{MSG_INVALID, MSG_LED_MENU, MSG_MAIN_MENU, Outbox};
use crate::app::ports::{RtcPort, SerialTx, TimerPort};
use crate::app::rtc::RtcConsole;
use crate::drivers::led_bank::LedBank;
use crate::drivers::led_patterns::{EffectKind, LedEffect};
use crate::fsm::AppState;
use crate::timers::{SoftTimer, run_timer};

/// Assemble lines as they complete and route them.
///
/// One wake may stand for several terminators, so the task keeps running
/// passes while they produce commands, yielding after each dispatch so
/// the receiving task can take it before the next one.
pub async fn command_task(console: &Console) {
    let mut assembler = CommandAssembler::new();
    let router = console.router();
    loop {
        console.line_ready.wait().await;
        while let Assembly::Complete(cmd) = assembler.pass(&console.rx) {
            router.dispatch(cmd);
            future::yield_now().await;
        }
    }
}

/// Main menu: print, take one choice, hand over, wait for the return.
pub async fn menu_task(console: &Console) {
    loop {
        console.print(MSG_MAIN_MENU).await;
        let cmd = console.menu_inbox.wait().await;
        match MenuChoice::select(&cmd) {
            MenuChoice::LedEffects => {
                console.state.set(AppState::LedEffect);
                console.led_enter.signal(());
                console.menu_return.wait().await;
            }
            MenuChoice::DateTime => {
                console.state.set(AppState::RtcMenu);
                console.rtc_enter.signal(());
                console.menu_return.wait().await;
            }
            MenuChoice::Exit => info!("menu: exit selected"),
            MenuChoice::Invalid => console.print(MSG_INVALID).await,
        }
    }
}

/// LED submenu: one command per entry, then back to the main menu.
pub async fn led_task<T: TimerPort + ?Sized>(console: &Console, timers: &T) {
    loop {
        console.led_enter.wait().await;
        console.print(MSG_LED_MENU).await;
        let cmd = console.led_inbox.wait().await;
        let mut out = Outbox::new();
        led::apply_command(&cmd, timers, &mut out);
        console.state.set(AppState::MainMenu);
        console.flush(out).await;
        console.menu_return.signal(());
    }
}

/// RTC menu and dialogs; stays in control until the state returns to
/// `MainMenu`.
pub async fn rtc_task<R: RtcPort, T: TimerPort + ?Sized>(
    console: &Console,
    mut rtc: R,
    timers: &T,
) {
    let mut dialog = RtcConsole::new();
    loop {
        console.rtc_enter.wait().await;
        let mut out = Outbox::new();
        dialog.enter(&mut rtc, &mut out);
        console.flush(out).await;

        while console.state.get() != AppState::MainMenu {
            let cmd = console.rtc_inbox.wait().await;
            let mut out = Outbox::new();
            let next = dialog.handle(console.state.get(), &cmd, &mut rtc, timers, &mut out);
            console.state.set(next);
            console.flush(out).await;
        }
        console.menu_return.signal(());
    }
}

/// Drain the print queue into the transmit primitive, one message at a
/// time in FIFO order.
pub async fn print_task<S: SerialTx>(console: &Console, mut tx: S) {
    loop {
        let msg = console.print_queue.receive().await;
        if let Err(e) = tx.transmit(msg.as_bytes()) {
            warn!("print: {}", e);
        }
    }
}

/// Run one LED slot: every firing advances `kind` and shows its frame.
pub async fn led_effect_timer<P: OutputPin>(
    timer: &SoftTimer,
    kind: EffectKind,
    bank: &RefCell<LedBank<P>>,
) {
    let mut effect = LedEffect::new(kind);
    run_timer(timer, || {
        let mask = effect.step();
        bank.borrow_mut().write_mask(mask);
    })
    .await;
}

/// Run the report timer: every firing queues a time/date snapshot.
pub async fn rtc_report_timer<R: RtcPort>(console: &Console, timer: &SoftTimer, mut rtc: R) {
    run_timer(timer, || {
        let time = rtc.read_time();
        let date = rtc.read_date();
        for line in clock::snapshot(&time, &date) {
            if let Err(e) = console.try_print(line) {
                warn!("report: line dropped: {}", e);
            }
        }
    })
    .await;
}
