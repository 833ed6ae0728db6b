//! Application state machine.
//!
//! ```text
//!                 ┌──────────── 0 ────────────┐
//!                 │                           ▼
//!  ┌──────────┐   │   ┌──────────┐      ┌───────────┐
//!  │ MainMenu │───┘   │ RtcMenu  │──0──▶│ TimeConfig│──┐
//!  │          │──1───▶│          │──1──▶│ DateConfig│──┤
//!  └──────────┘       │          │──2──▶│ Report    │──┤
//!       ▲  ▲          └────┬─────┘      └───────────┘  │
//!       │  └───── 3 ───────┘                           │
//!       └──────────────────────────────────────────────┘
//!                (LedEffect also returns after one command)
//! ```
//!
//! [`AppState`] names the dialog that owns the next input line; the
//! router maps it to the owning task with [`AppState::owner`]. The live
//! value sits in a [`StateCell`](context::StateCell) shared by the
//! router and every subsystem task.

pub mod context;
pub mod dialog;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all console states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum AppState {
    #[default]
    MainMenu = 0,
    LedEffect = 1,
    RtcMenu = 2,
    RtcTimeConfig = 3,
    RtcDateConfig = 4,
    RtcReport = 5,
}

/// The subsystem task that consumes commands in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Menu,
    Led,
    Rtc,
}

impl AppState {
    /// Total number of states.
    pub const COUNT: usize = 6;

    pub const ALL: [AppState; Self::COUNT] = [
        Self::MainMenu,
        Self::LedEffect,
        Self::RtcMenu,
        Self::RtcTimeConfig,
        Self::RtcDateConfig,
        Self::RtcReport,
    ];

    /// Which task a command received in this state is routed to.
    pub const fn owner(self) -> Owner {
        match self {
            Self::MainMenu => Owner::Menu,
            Self::LedEffect => Owner::Led,
            Self::RtcMenu | Self::RtcTimeConfig | Self::RtcDateConfig | Self::RtcReport => {
                Owner::Rtc
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::MainMenu => "MainMenu",
            Self::LedEffect => "LedEffect",
            Self::RtcMenu => "RtcMenu",
            Self::RtcTimeConfig => "RtcTimeConfig",
            Self::RtcDateConfig => "RtcDateConfig",
            Self::RtcReport => "RtcReport",
        }
    }
}
