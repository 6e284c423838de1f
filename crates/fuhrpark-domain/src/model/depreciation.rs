//! Depreciation bookings

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::guard;
use fuhrpark_types::Result;

/// A single depreciation booking against a vehicle's residual value
#[derive(Debug, Clone, PartialEq)]
pub struct DepreciationEntry {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub reason: String,
}

impl DepreciationEntry {
    pub fn new(date: NaiveDate, amount: Decimal, reason: &str) -> Result<Self> {
        Ok(Self {
            date,
            amount: guard::greater_than_zero(amount, "depreciation amount")?,
            reason: guard::not_blank(reason, "depreciation reason")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn rejects_non_positive_amount() {
        assert!(DepreciationEntry::new(date(), Decimal::ZERO, "wear").is_err());
        assert!(DepreciationEntry::new(date(), Decimal::from(-50), "wear").is_err());
    }

    #[test]
    fn rejects_blank_reason() {
        assert!(DepreciationEntry::new(date(), Decimal::from(100), "  ").is_err());
    }
}
