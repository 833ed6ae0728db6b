//! End-to-end console flows: bytes in through the receive path, text out
//! of the print queue, with the real tasks scheduled in between.

use cmdconsole::app::messages::{
    MSG_CONFIG_OK, MSG_INVALID, MSG_LED_MENU, MSG_MAIN_MENU, MSG_REPORT_PROMPT, MSG_RTC_HEADER,
    MSG_RTC_OPTIONS,
};
use cmdconsole::app::ports::TimerPort;
use cmdconsole::config::ConsoleConfig;
use cmdconsole::console::channels::Console;
use cmdconsole::console::tasks;
use cmdconsole::fsm::AppState;
use cmdconsole::timers::TimerId;
use edge_executor::LocalExecutor;

use crate::mock_hw::{RecordingTx, Rig, sleep_ms};

// ── Main menu ─────────────────────────────────────────────────

#[test]
fn led_option_opens_led_menu() {
    let rig = Rig::new(&ConsoleConfig::default());
    rig.run(async {
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        rig.type_line("0");
        assert_eq!(rig.next_output().await, MSG_LED_MENU);
        assert_eq!(rig.console.state.get(), AppState::LedEffect);
    });
}

#[test]
fn unknown_option_reports_invalid_and_stays() {
    let rig = Rig::new(&ConsoleConfig::default());
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        rig.type_line("9");
        assert_eq!(rig.next_output().await, MSG_INVALID);
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        assert_eq!(rig.console.state.get(), AppState::MainMenu);
    });
}

#[test]
fn exit_option_reprints_menu() {
    let rig = Rig::new(&ConsoleConfig::default());
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        rig.type_line("2");
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        assert_eq!(rig.console.state.get(), AppState::MainMenu);
    });
}

#[test]
fn overlong_line_still_completes() {
    let rig = Rig::new(&ConsoleConfig::default());
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        // Twelve bytes before the terminator overflow the 10-byte queue;
        // the terminator evicts the oldest byte and the line completes.
        rig.type_line("abcdefghijkl");
        assert_eq!(rig.next_output().await, MSG_INVALID);
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
    });
}

// ── LED effects ───────────────────────────────────────────────

#[test]
fn effect_three_runs_until_none() {
    let rig = Rig::fast();
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        rig.type_line("0");
        assert_eq!(rig.next_output().await, MSG_LED_MENU);
        rig.type_line("e3");
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        assert_eq!(rig.console.state.get(), AppState::MainMenu);
        assert_eq!(rig.timers.active_leds().collect::<Vec<_>>(), [TimerId::Led3]);

        sleep_ms(55).await;
        assert!([1, 2, 4, 8].contains(&rig.led_mask()));

        rig.type_line("0");
        assert_eq!(rig.next_output().await, MSG_LED_MENU);
        rig.type_line("none");
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        assert_eq!(rig.timers.active_leds().count(), 0);

        let frozen = rig.led_mask();
        sleep_ms(40).await;
        assert_eq!(rig.led_mask(), frozen);
    });
}

#[test]
fn switching_effects_keeps_one_slot() {
    let rig = Rig::fast();
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        for cmd in ["e1", "e4", "e2"] {
            rig.type_line("0");
            assert_eq!(rig.next_output().await, MSG_LED_MENU);
            rig.type_line(cmd);
            assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
            assert_eq!(rig.timers.active_leds().count(), 1);
        }
        assert!(rig.timers.is_active(TimerId::Led2));
    });
}

#[test]
fn bad_led_command_reports_invalid_and_returns() {
    let rig = Rig::new(&ConsoleConfig::default());
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        rig.type_line("0");
        rig.read_until(MSG_LED_MENU).await;
        rig.type_line("e9");
        assert_eq!(rig.next_output().await, MSG_INVALID);
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        assert_eq!(rig.console.state.get(), AppState::MainMenu);
    });
}

// ── RTC ───────────────────────────────────────────────────────

#[test]
fn time_dialog_commits_and_shows_new_time() {
    let rig = Rig::new(&ConsoleConfig::default());
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        rig.type_line("1");
        let entry = rig.read_until(MSG_RTC_OPTIONS).await;
        assert_eq!(entry.len(), 4);
        assert_eq!(entry[1], "\nCurrent Time&Date:\t03:00:00 [PM]\n");
        assert_eq!(entry[2], "24-01-01\n");

        rig.type_line("0");
        assert_eq!(rig.next_output().await, "Enter hour(1-12):");
        rig.type_line("11");
        assert_eq!(rig.next_output().await, "Enter minutes(0-59):");

        // Mid-dialog, only the RTC task may receive commands.
        assert_eq!(rig.console.state.get(), AppState::RtcTimeConfig);
        assert!(!rig.console.menu_inbox.signaled());
        assert!(!rig.console.led_inbox.signaled());

        rig.type_line("59");
        assert_eq!(rig.next_output().await, "Enter seconds(0-59):");
        rig.type_line("05");
        assert_eq!(rig.next_output().await, MSG_CONFIG_OK);
        assert_eq!(
            rig.next_output().await,
            "\nCurrent Time&Date:\t11:59:05 [PM]\n"
        );
        assert_eq!(rig.next_output().await, "24-01-01\n");
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        assert_eq!(rig.console.state.get(), AppState::MainMenu);
        assert_eq!(rig.rtc.with(|r| r.time_writes), 1);
    });
}

#[test]
fn date_dialog_commits() {
    let rig = Rig::new(&ConsoleConfig::default());
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        rig.type_line("1");
        rig.read_until(MSG_RTC_OPTIONS).await;
        rig.type_line("1");
        assert_eq!(rig.next_output().await, "Enter date(1-31):");
        rig.type_line("15");
        assert_eq!(rig.next_output().await, "Enter month(1-12):");
        rig.type_line("08");
        assert_eq!(rig.next_output().await, "Enter day(1-7 sun:1):");
        rig.type_line("3");
        assert_eq!(rig.next_output().await, "Enter year(0-99):");
        rig.type_line("23");
        assert_eq!(rig.next_output().await, MSG_CONFIG_OK);
        rig.next_output().await;
        assert_eq!(rig.next_output().await, "23-08-15\n");
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        assert_eq!(rig.rtc.with(|r| r.date.weekday), 3);
    });
}

#[test]
fn out_of_range_hour_is_rejected() {
    let rig = Rig::new(&ConsoleConfig::default());
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        rig.type_line("1");
        rig.read_until(MSG_RTC_OPTIONS).await;
        for line in ["0", "13", "00"] {
            rig.type_line(line);
            rig.next_output().await;
        }
        rig.type_line("00");
        assert_eq!(rig.next_output().await, MSG_INVALID);
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        assert_eq!(rig.rtc.with(|r| r.time_writes), 0);
    });
}

#[test]
fn invalid_rtc_menu_choice_stays_in_rtc_menu() {
    let rig = Rig::new(&ConsoleConfig::default());
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        rig.type_line("1");
        rig.read_until(MSG_RTC_OPTIONS).await;
        rig.type_line("x");
        assert_eq!(rig.next_output().await, MSG_INVALID);
        assert_eq!(rig.next_output().await, MSG_RTC_OPTIONS);
        assert_eq!(rig.console.state.get(), AppState::RtcMenu);
        rig.type_line("3");
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        assert_eq!(rig.console.state.get(), AppState::MainMenu);
    });
}

#[test]
fn reporting_emits_snapshots_until_disabled() {
    let rig = Rig::fast();
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        rig.type_line("1");
        rig.read_until(MSG_RTC_OPTIONS).await;
        rig.type_line("2");
        assert_eq!(rig.next_output().await, MSG_REPORT_PROMPT);
        rig.type_line("y");
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        assert!(rig.timers.is_active(TimerId::RtcReport));

        assert_eq!(
            rig.next_output().await,
            "\nCurrent Time&Date:\t03:00:00 [PM]\n"
        );
        assert_eq!(rig.next_output().await, "24-01-01\n");

        // Report lines may interleave with the menus from here on.
        rig.type_line("1");
        rig.read_until(MSG_RTC_OPTIONS).await;
        rig.type_line("2");
        rig.read_until(MSG_REPORT_PROMPT).await;
        rig.type_line("n");
        rig.read_until(MSG_MAIN_MENU).await;
        assert!(!rig.timers.is_active(TimerId::RtcReport));

        while rig.console.print_queue.try_receive().is_ok() {}
        sleep_ms(60).await;
        assert!(rig.console.print_queue.try_receive().is_err());
    });
}

// ── Lines arriving under one wake ─────────────────────────────

#[test]
fn back_to_back_lines_follow_the_first_handover_to_rtc() {
    let rig = Rig::new(&ConsoleConfig::default());
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        // Both terminators land before the command task runs, so one
        // wake covers two lines. "0" must reach the RTC menu, not the
        // main menu that routed "1".
        rig.type_line("1");
        rig.type_line("0");
        let out = rig.read_until("Enter hour(1-12):").await;
        assert_eq!(out.first().map(String::as_str), Some(MSG_RTC_HEADER));
        assert!(!out.iter().any(|m| m == MSG_INVALID));
        assert_eq!(rig.console.state.get(), AppState::RtcTimeConfig);
        assert!(!rig.console.menu_inbox.signaled());
    });
}

#[test]
fn back_to_back_lines_follow_the_first_handover_to_leds() {
    let rig = Rig::new(&ConsoleConfig::default());
    rig.run(async {
        rig.read_until(MSG_MAIN_MENU).await;
        rig.type_line("0");
        rig.type_line("e3");
        assert_eq!(rig.next_output().await, MSG_LED_MENU);
        assert_eq!(rig.next_output().await, MSG_MAIN_MENU);
        assert_eq!(rig.timers.active_leds().collect::<Vec<_>>(), [TimerId::Led3]);
        assert_eq!(rig.console.state.get(), AppState::MainMenu);
    });
}

// ── Print task ────────────────────────────────────────────────

#[test]
fn print_task_transmits_in_queue_order() {
    let console = Console::new();
    let tx = RecordingTx::default();
    let sent = tx.sent.clone();
    let ex: LocalExecutor<'_, 4> = LocalExecutor::new();
    ex.spawn(tasks::print_task(&console, tx)).detach();
    futures_lite::future::block_on(ex.run(async {
        console.print(MSG_MAIN_MENU).await;
        console.print(MSG_INVALID).await;
        console.print(MSG_CONFIG_OK).await;
        while !console.print_queue.is_empty() {
            futures_lite::future::yield_now().await;
        }
        futures_lite::future::yield_now().await;
    }));
    assert_eq!(*sent.borrow(), [MSG_MAIN_MENU, MSG_INVALID, MSG_CONFIG_OK]);
}
