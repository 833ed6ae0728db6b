//! Serial console backbone: interrupt ingest, line assembly, routing and
//! the subsystem tasks.
//!
//! [`run`] wires the tasks onto one `edge-executor` and drives them
//! forever. Boards call it after bringing up their LEDs, UART and RTC.

pub mod assembler;
pub mod channels;
pub mod ingest;
pub mod router;
pub mod tasks;

use core::cell::RefCell;

use edge_executor::LocalExecutor;
use embedded_hal::digital::OutputPin;
use log::info;

use crate::app::ports::{RtcPort, SerialTx, SharedRtc};
use crate::config::ConsoleConfig;
use crate::drivers::led_bank::LedBank;
use crate::drivers::led_patterns::EffectKind;
use crate::error::{Error, Result};
use crate::timers::{TimerId, TimerMux};

use channels::Console;

/// Run-queue depth. Ten futures are spawned: five console tasks, four
/// LED slots and the report timer.
const EXECUTOR_SLOTS: usize = 16;

/// Run the console until power-off.
///
/// Returns early only if the configuration or task setup is invalid.
pub fn run<P, S, R>(
    console: &Console,
    config: &ConsoleConfig,
    leds: LedBank<P>,
    tx: S,
    rtc: R,
) -> Result<()>
where
    P: OutputPin,
    S: SerialTx,
    R: RtcPort,
{
    let timers = TimerMux::from_config(config)?;
    let rtc = SharedRtc::new(rtc);
    let leds = RefCell::new(leds);

    let executor: LocalExecutor<'_, EXECUTOR_SLOTS> = LocalExecutor::new();

    executor.spawn(tasks::command_task(console)).detach();
    executor.spawn(tasks::menu_task(console)).detach();
    executor.spawn(tasks::led_task(console, &timers)).detach();
    executor.spawn(tasks::rtc_task(console, &rtc, &timers)).detach();
    executor.spawn(tasks::print_task(console, tx)).detach();

    for id in TimerId::LEDS {
        let kind = id
            .led_slot()
            .and_then(EffectKind::from_slot)
            .ok_or(Error::Init("LED slot without an effect"))?;
        executor
            .spawn(tasks::led_effect_timer(timers.timer(id), kind, &leds))
            .detach();
    }
    executor
        .spawn(tasks::rtc_report_timer(
            console,
            timers.timer(TimerId::RtcReport),
            &rtc,
        ))
        .detach();

    info!(
        "console: running (LED period {} ms, report period {} ms)",
        config.led_effect_period_ms, config.rtc_report_period_ms
    );

    futures_lite::future::block_on(executor.run(core::future::pending::<()>()));
    Ok(())
}
