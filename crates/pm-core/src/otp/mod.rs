//! One-time-code entry.
//!
//! A fixed six-slot buffer where each slot is empty or holds one ASCII
//! digit. Accepting a non-empty digit advances focus to the next slot; the
//! advance is returned to the caller instead of being applied to any UI.

use serde::{Deserialize, Serialize};

pub const OTP_LENGTH: usize = 6;

/// Six single-character slots, each empty or one decimal digit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpBuffer {
    slots: [String; OTP_LENGTH],
}

impl OtpBuffer {
    pub fn slots(&self) -> &[String; OTP_LENGTH] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| !s.is_empty())
    }

    pub fn code(&self) -> OtpCode {
        OtpCode(self.slots.concat())
    }
}

/// The digits currently entered, concatenated in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0.len() == OTP_LENGTH
    }
}

impl From<&str> for OtpCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request to move input focus to another slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusAdvance {
    pub to: usize,
}

/// Result of a single `set_digit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitInput {
    Accepted { focus: Option<FocusAdvance> },
    Rejected,
}

impl DigitInput {
    pub fn is_accepted(self) -> bool {
        matches!(self, DigitInput::Accepted { .. })
    }

    pub fn focus(self) -> Option<FocusAdvance> {
        match self {
            DigitInput::Accepted { focus } => focus,
            DigitInput::Rejected => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    buffer: OtpBuffer,
    focused: usize,
}

impl OtpEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &OtpBuffer {
        &self.buffer
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Writes `raw` into slot `index`.
    ///
    /// Accepted only when `raw` is empty or exactly one ASCII digit and
    /// `index` is in range; otherwise the slot keeps its value. Focus
    /// advances only after a non-empty value lands in a slot below the last.
    pub fn set_digit(&mut self, index: usize, raw: &str) -> DigitInput {
        if index >= OTP_LENGTH || !is_digit_input(raw) {
            return DigitInput::Rejected;
        }

        self.buffer.slots[index] = raw.to_string();

        let focus = if !raw.is_empty() && index < OTP_LENGTH - 1 {
            self.focused = index + 1;
            Some(FocusAdvance { to: index + 1 })
        } else {
            None
        };
        DigitInput::Accepted { focus }
    }
}

fn is_digit_input(raw: &str) -> bool {
    raw.chars().count() <= 1 && raw.chars().all(|c| c.is_ascii_digit())
}
