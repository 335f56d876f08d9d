//! Money type

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

/// A monetary amount, such as a customer's monthly recurring revenue.
///
/// A thin wrapper around `Decimal`. The currency itself is not tracked; the
/// grid only needs the amount for ordering and display.
///
/// # Example
///
/// ```
/// use datagrid_lib::model::types::Money;
/// use rust_decimal::Decimal;
///
/// let mrr = Money::new(Decimal::new(123450, 2)); // 1234.50
/// assert_eq!(mrr.grouped(), "1,234.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Creates a new Money value.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the inner decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Creates a Money value from an integer (whole units).
    pub fn from_int(value: i64) -> Self {
        Self(Decimal::new(value, 0))
    }

    /// Amount with thousands separators and at most three fraction digits,
    /// trailing zeros dropped (`1234.50` → `1,234.5`).
    pub fn grouped(&self) -> String {
        group_thousands(&self.0.round_dp(3).normalize().to_string())
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inserts `,` between groups of three integer digits of a plain decimal
/// string (`-1234567.25` → `-1,234,567.25`).
pub(crate) fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567.25"), "1,234,567.25");
        assert_eq!(group_thousands("-45000"), "-45,000");
    }

    #[test]
    fn test_grouped_drops_trailing_zeros() {
        assert_eq!(Money::new(Decimal::new(1200000, 2)).grouped(), "12,000");
        assert_eq!(Money::new(Decimal::new(12345678, 4)).grouped(), "1,234.568");
        assert_eq!(Money::from_int(50).grouped(), "50");
    }
}
