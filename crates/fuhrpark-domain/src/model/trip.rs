//! Trip log entries

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::guard;
use fuhrpark_types::{Error, Result};

/// One usage event linking a user to a vehicle
///
/// Stores foreign-key style ids, not references; whether they point at
/// existing entities is checked by the trip log service at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct TripEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub reason: String,
    pub kilometers: Decimal,
}

impl TripEntry {
    /// Create a validated trip entry; a fresh id is assigned when none is given.
    pub fn new(
        id: Option<Uuid>,
        date: NaiveDate,
        user_id: Uuid,
        vehicle_id: Uuid,
        reason: &str,
        kilometers: Decimal,
    ) -> Result<Self> {
        if user_id.is_nil() {
            return Err(Error::Blank("user id".to_string()));
        }
        if vehicle_id.is_nil() {
            return Err(Error::Blank("vehicle id".to_string()));
        }

        Ok(Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            date,
            user_id,
            vehicle_id,
            reason: guard::not_blank(reason, "trip reason")?,
            kilometers: guard::in_range(
                kilometers,
                Decimal::new(1, 1),
                Decimal::from(1_000_000),
                "kilometers",
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn rejects_nil_ids() {
        let id = Uuid::new_v4();
        assert!(TripEntry::new(None, date(), Uuid::nil(), id, "errand", Decimal::from(10)).is_err());
        assert!(TripEntry::new(None, date(), id, Uuid::nil(), "errand", Decimal::from(10)).is_err());
    }

    #[test]
    fn kilometer_bounds_are_enforced() {
        let u = Uuid::new_v4();
        let v = Uuid::new_v4();
        assert!(TripEntry::new(None, date(), u, v, "errand", Decimal::new(5, 2)).is_err()); // 0.05
        assert!(TripEntry::new(None, date(), u, v, "errand", Decimal::new(1, 1)).is_ok()); // 0.1
        assert!(TripEntry::new(None, date(), u, v, "errand", Decimal::from(1_000_001)).is_err());
    }

    #[test]
    fn rejects_blank_reason() {
        let u = Uuid::new_v4();
        let v = Uuid::new_v4();
        assert!(TripEntry::new(None, date(), u, v, "  ", Decimal::from(10)).is_err());
    }
}
