//! Money type for representing yen amounts.
//!
//! Amounts are whole yen in an `i64`. All arithmetic that can overflow is
//! checked and returns `None` instead of wrapping.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A monetary value in whole yen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Money(i64);

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero yen.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in yen.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Try to add another Money value.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Try to multiply by a quantity.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Sum an iterator of Money values, `None` on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }

    /// Apply a tax rate, rounding down to the yen.
    pub fn try_with_tax(&self, rate: TaxRate) -> Option<Money> {
        rate.apply(*self)
    }

    /// Format with the yen sign and thousands separators (e.g. "¥1,234").
    pub fn display(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}\u{00a5}{}", sign, group_thousands(self.0.unsigned_abs()))
    }

    /// Format as a unit price label (e.g. "1234円").
    pub fn display_unit(&self) -> String {
        format!("{}\u{5186}", self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

// Backends may encode prices as floats ("120.0"); accept those when they are
// integral.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl<'de> Visitor<'de> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a whole yen amount")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                Ok(Money(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                i64::try_from(v)
                    .map(Money)
                    .map_err(|_| E::custom(format!("amount {} out of range", v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                    Ok(Money(v as i64))
                } else {
                    Err(E::custom(format!("amount {} is not a whole yen value", v)))
                }
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

/// A tax rate in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate {
    percent: u32,
}

/// Japanese consumption tax applied to every purchase.
pub const CONSUMPTION_TAX: TaxRate = TaxRate::percent(10);

impl TaxRate {
    /// Create a rate from whole percent.
    pub const fn percent(percent: u32) -> Self {
        Self { percent }
    }

    /// The rate in whole percent.
    pub fn as_percent(&self) -> u32 {
        self.percent
    }

    /// `floor(amount * (1 + rate))`, in integer arithmetic.
    pub fn apply(&self, amount: Money) -> Option<Money> {
        let factor = 100_i64.checked_add(i64::from(self.percent))?;
        amount
            .0
            .checked_mul(factor)
            .map(|scaled| Money(scaled.div_euclid(100)))
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(0).display(), "\u{00a5}0");
        assert_eq!(Money::new(999).display(), "\u{00a5}999");
        assert_eq!(Money::new(1000).display(), "\u{00a5}1,000");
        assert_eq!(Money::new(1234567).display(), "\u{00a5}1,234,567");
        assert_eq!(Money::new(-1005).display(), "-\u{00a5}1,005");
    }

    #[test]
    fn test_money_display_unit() {
        assert_eq!(Money::new(1200).display_unit(), "1200\u{5186}");
    }

    #[test]
    fn test_try_sum() {
        let amounts = [Money::new(200), Money::new(150)];
        assert_eq!(Money::try_sum(amounts.iter()), Some(Money::new(350)));
        assert_eq!(Money::try_sum(std::iter::empty()), Some(Money::zero()));

        let overflow = [Money::new(i64::MAX), Money::new(1)];
        assert_eq!(Money::try_sum(overflow.iter()), None);
    }

    #[test]
    fn test_try_multiply_overflow() {
        assert_eq!(Money::new(120).try_multiply(2), Some(Money::new(240)));
        assert_eq!(Money::new(i64::MAX).try_multiply(2), None);
    }

    #[test]
    fn test_consumption_tax_floors() {
        assert_eq!(CONSUMPTION_TAX.apply(Money::new(350)), Some(Money::new(385)));
        // 99 * 1.1 = 108.9
        assert_eq!(CONSUMPTION_TAX.apply(Money::new(99)), Some(Money::new(108)));
        assert_eq!(CONSUMPTION_TAX.apply(Money::new(1000)), Some(Money::new(1100)));
        assert_eq!(CONSUMPTION_TAX.apply(Money::zero()), Some(Money::zero()));
        // floor, not truncation: -9 * 1.1 = -9.9
        assert_eq!(CONSUMPTION_TAX.apply(Money::new(-9)), Some(Money::new(-10)));
    }

    #[test]
    fn test_tax_overflow() {
        assert_eq!(CONSUMPTION_TAX.apply(Money::new(i64::MAX)), None);
    }

    #[test]
    fn test_deserialize_integral_float() {
        let m: Money = serde_json::from_str("120").unwrap();
        assert_eq!(m, Money::new(120));

        let m: Money = serde_json::from_str("120.0").unwrap();
        assert_eq!(m, Money::new(120));

        assert!(serde_json::from_str::<Money>("120.5").is_err());
        assert!(serde_json::from_str::<Money>("\"120\"").is_err());
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&Money::new(50)).unwrap(), "50");
    }
}
