//! Single-slot memory register (M+/M-/MR/MC).

use serde::{Deserialize, Serialize};

/// One numeric memory slot.
///
/// Starts at zero and is only ever changed by the memory actions; in
/// particular `Clear` on the calculator does not touch it. Inputs that do
/// not parse as a number (including the error display strings) count as
/// zero, so the memory actions never fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    /// Creates an empty register (value 0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stored value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// True when the register holds something other than zero.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value != 0.0
    }

    /// M+: adds the parsed display string to the register.
    pub fn add(&mut self, display: &str) {
        self.value += parse_or_zero(display);
    }

    /// M-: subtracts the parsed display string from the register.
    pub fn subtract(&mut self, display: &str) {
        self.value -= parse_or_zero(display);
    }

    /// MC: resets the register to zero.
    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}

fn parse_or_zero(display: &str) -> f64 {
    display.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        let mem = MemoryRegister::new();
        assert_eq!(mem.value(), 0.0);
        assert!(!mem.is_set());
    }

    #[test]
    fn test_add_and_subtract() {
        let mut mem = MemoryRegister::new();
        mem.add("5");
        assert_eq!(mem.value(), 5.0);
        mem.subtract("2");
        assert_eq!(mem.value(), 3.0);
    }

    #[test]
    fn test_round_trip_returns_to_zero() {
        let mut mem = MemoryRegister::new();
        mem.add("5");
        mem.subtract("5");
        assert_eq!(mem.value(), 0.0);
    }

    #[test]
    fn test_unparsable_counts_as_zero() {
        let mut mem = MemoryRegister::new();
        mem.add("Error");
        mem.add("");
        mem.subtract("not a number");
        assert_eq!(mem.value(), 0.0);
    }

    #[test]
    fn test_decimal_values() {
        let mut mem = MemoryRegister::new();
        mem.add("2.5");
        mem.add("-0.5");
        assert_eq!(mem.value(), 2.0);
    }

    #[test]
    fn test_clear() {
        let mut mem = MemoryRegister::new();
        mem.add("7");
        mem.clear();
        assert_eq!(mem.value(), 0.0);
    }
}
