//! LED effect frame generators.
//!
//! Each effect produces a 4-bit mask per timer firing; bit `i` drives
//! LED `i`. Effects keep their phase across stop/start, so resuming an
//! effect continues where it left off.
//!
//! | Effect | Kind      | Frames (bit 3..0)                    |
//! |--------|-----------|--------------------------------------|
//! | e1     | Blink     | `1111`, `0000`, ...                  |
//! | e2     | OddEven   | `0101`, `1010`, ...                  |
//! | e3     | MarchUp   | `0001`, `0010`, `0100`, `1000`, ...  |
//! | e4     | MarchDown | `1000`, `0100`, `0010`, `0001`, ...  |

/// Mask with every LED lit.
pub const ALL_ON: u8 = 0b1111;

/// Odd-numbered LEDs, LED1 and LED3 (bank bits 0 and 2).
pub const ODD_LEDS: u8 = 0b0101;

/// Even-numbered LEDs, LED2 and LED4 (bank bits 1 and 3).
pub const EVEN_LEDS: u8 = 0b1010;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Blink,
    OddEven,
    MarchUp,
    MarchDown,
}

impl EffectKind {
    /// Effect run by LED timer slot `1..=4`.
    pub const fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(Self::Blink),
            2 => Some(Self::OddEven),
            3 => Some(Self::MarchUp),
            4 => Some(Self::MarchDown),
            _ => None,
        }
    }
}

/// One effect with its own phase.
#[derive(Debug, Clone)]
pub struct LedEffect {
    kind: EffectKind,
    toggle: bool,
    index: u8,
}

impl LedEffect {
    pub const fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            toggle: false,
            index: 0,
        }
    }

    /// Advance one frame and return the mask to show.
    pub fn step(&mut self) -> u8 {
        match self.kind {
            EffectKind::Blink => {
                self.toggle = !self.toggle;
                if self.toggle { ALL_ON } else { 0 }
            }
            EffectKind::OddEven => {
                self.toggle = !self.toggle;
                if self.toggle { ODD_LEDS } else { EVEN_LEDS }
            }
            EffectKind::MarchUp => {
                let mask = 0x01 << (self.index % 4);
                self.index = self.index.wrapping_add(1) % 4;
                mask
            }
            EffectKind::MarchDown => {
                let mask = 0x08 >> (self.index % 4);
                self.index = self.index.wrapping_add(1) % 4;
                mask
            }
        }
    }
}
