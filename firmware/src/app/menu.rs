//! Main menu selection.

use super::commands::Command;

/// What a main-menu command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LedEffects,
    DateTime,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn select(cmd: &Command) -> Self {
        match cmd.digit() {
            Some(0) => Self::LedEffects,
            Some(1) => Self::DateTime,
            Some(2) => Self::Exit,
            _ => Self::Invalid,
        }
    }
}
