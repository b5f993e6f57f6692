//! Character classification for the adaptive shift layer

use crate::trace::ShiftRule;

/// Class of a single character
///
/// Only ASCII letters and digits are rotated. Everything else, including
/// non-ASCII letters, is `Other` and passes through Layer 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter { upper: bool },
    Digit,
    Other,
}

/// Classify a character. Total, never fails.
pub fn classify(c: char) -> CharClass {
    if c.is_ascii_uppercase() {
        CharClass::Letter { upper: true }
    } else if c.is_ascii_lowercase() {
        CharClass::Letter { upper: false }
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

impl CharClass {
    /// Rule name recorded in the trace
    pub fn rule(self) -> ShiftRule {
        match self {
            CharClass::Letter { .. } => ShiftRule::LetterShift,
            CharClass::Digit => ShiftRule::DigitShift,
            CharClass::Other => ShiftRule::Passthrough,
        }
    }

    /// First character of the rotation alphabet and its size
    pub(crate) fn alphabet(self) -> Option<(u8, u32)> {
        match self {
            CharClass::Letter { upper: true } => Some((b'A', 26)),
            CharClass::Letter { upper: false } => Some((b'a', 26)),
            CharClass::Digit => Some((b'0', 10)),
            CharClass::Other => None,
        }
    }

    /// Shift applied at character index `index`
    ///
    /// Letters: `(i mod 26) + 1`. Digits: `(i mod 10) + 1`. Other: 0.
    pub fn shift_at(self, index: usize) -> u8 {
        match self.alphabet() {
            Some((_, size)) => (index % size as usize) as u8 + 1,
            None => 0,
        }
    }
}
