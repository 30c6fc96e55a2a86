//! Helper methods for [`Mutez`] amounts.
//!
//! tzKT reports every balance, fee, deposit and reward in mutez, the smallest tez unit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 1 tez = 10^6 mutez.
pub const MUTEZ_PER_TEZ: i64 = 1_000_000;

/// An amount of mutez. Signed, since balance changes and losses can be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mutez(pub i64);

impl Mutez {
    pub const ZERO: Self = Self(0);

    /// Returns the raw mutez value.
    pub fn as_mutez(&self) -> i64 {
        self.0
    }

    /// Create a [`Mutez`] from a raw mutez amount.
    pub fn from_mutez(amount: i64) -> Self {
        Self(amount)
    }

    /// Create a [`Mutez`] from whole tez (multiplied by 10^6).
    ///
    /// Returns `None` if the result does not fit in an `i64`.
    pub fn from_tez(amount: i64) -> Option<Self> {
        amount.checked_mul(MUTEZ_PER_TEZ).map(Self)
    }

    /// Approximate value in tez as `f64` (useful for display).
    pub fn as_tez(&self) -> f64 {
        self.0 as f64 / MUTEZ_PER_TEZ as f64
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl From<i64> for Mutez {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Mutez {
    /// Formats as tez with six decimals, e.g. `0.610000 ꜩ`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_tez = MUTEZ_PER_TEZ as u64;
        write!(f, "{sign}{}.{:06} ꜩ", abs / per_tez, abs % per_tez)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutez_to_tez() {
        let amount = Mutez::from_mutez(610_000);
        assert!((amount.as_tez() - 0.61).abs() < 1e-12);
    }

    #[test]
    fn mutez_from_tez() {
        assert_eq!(Mutez::from_tez(3), Some(Mutez(3 * MUTEZ_PER_TEZ)));
        assert_eq!(Mutez::from_tez(i64::MAX / MUTEZ_PER_TEZ + 1), None);
    }

    #[test]
    fn display_keeps_every_decimal() {
        assert_eq!(Mutez(1_500_001).to_string(), "1.500001 ꜩ");
        assert_eq!(Mutez(-250_000).to_string(), "-0.250000 ꜩ");
        assert_eq!(Mutez::ZERO.to_string(), "0.000000 ꜩ");
    }

    #[test]
    fn checked_add_detects_overflow() {
        assert_eq!(Mutez(1).checked_add(Mutez(2)), Some(Mutez(3)));
        assert_eq!(Mutez(i64::MAX).checked_add(Mutez(1)), None);
    }

    #[test]
    fn serializes_as_a_bare_number() {
        let json = serde_json::to_string(&Mutez(42)).expect("serialize");
        assert_eq!(json, "42");
        let parsed: Mutez = serde_json::from_str("-7").expect("deserialize");
        assert_eq!(parsed, Mutez(-7));
    }
}
