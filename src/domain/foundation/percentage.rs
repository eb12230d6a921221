//! Percentage value object (0-100 scale).
//!
//! Used for match scores and wizard progress.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole number between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Rounds `part / whole` to the nearest whole percent, halves rounding up.
    ///
    /// A zero `whole` yields zero.
    pub fn from_ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let pct = (part as f64 * 100.0 / whole as f64).round();
        Self(pct.clamp(0.0, 100.0) as u8)
    }

    /// Caps the value at `ceiling`.
    pub fn capped_at(self, ceiling: u8) -> Self {
        Self(self.0.min(ceiling))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// True for exactly 100%.
    pub fn is_full(&self) -> bool {
        self.0 == 100
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
