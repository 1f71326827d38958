//! Bounded resources (health, energy).
//!
//! A meter is a value clamped between zero and a maximum.

use serde::{Deserialize, Serialize};

/// A numeric resource clamped to `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meter {
    /// Current value.
    pub current: u32,
    /// Maximum value.
    pub max: u32,
}

impl Meter {
    /// Create a full meter.
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Raise the meter, capped at the maximum. Returns the new value.
    pub fn restore(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_add(amount).min(self.max);
        self.current
    }

    /// Lower the meter, floored at zero. Returns the new value.
    pub fn drain(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Fill the meter to its maximum.
    pub fn fill(&mut self) {
        self.current = self.max;
    }

    /// Returns true if the meter is at zero.
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }
}

impl std::fmt::Display for Meter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_caps_at_max() {
        let mut m = Meter { current: 90, max: 100 };
        assert_eq!(m.restore(50), 100);
    }

    #[test]
    fn drain_floors_at_zero() {
        let mut m = Meter::full(100);
        assert_eq!(m.drain(30), 70);
        assert_eq!(m.drain(500), 0);
        assert!(m.is_empty());
    }

    #[test]
    fn display() {
        let m = Meter { current: 40, max: 100 };
        assert_eq!(m.to_string(), "40/100");
    }
}
