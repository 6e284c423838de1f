//! Repair records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::guard;
use fuhrpark_types::{RepairKind, Result};

/// A single repair or maintenance measure on a vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct Repair {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub kind: RepairKind,
    pub cost: Decimal,
    pub workshop: String,
}

impl Repair {
    /// Create a validated repair record; a fresh id is assigned when none is given.
    pub fn new(
        id: Option<Uuid>,
        date: NaiveDate,
        description: &str,
        kind: RepairKind,
        cost: Decimal,
        workshop: &str,
    ) -> Result<Self> {
        Ok(Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            date,
            description: guard::not_blank(description, "repair description")?,
            kind,
            cost: guard::greater_than_zero(cost, "repair cost")?,
            workshop: guard::not_blank(workshop, "workshop")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
    }

    #[test]
    fn assigns_fresh_id_when_absent() {
        let a = Repair::new(None, date(), "brakes", RepairKind::WearPart, Decimal::from(350), "ATU").unwrap();
        let b = Repair::new(None, date(), "brakes", RepairKind::WearPart, Decimal::from(350), "ATU").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn rejects_non_positive_cost() {
        assert!(Repair::new(None, date(), "brakes", RepairKind::Damage, Decimal::ZERO, "ATU").is_err());
    }

    #[test]
    fn rejects_blank_description_and_workshop() {
        assert!(Repair::new(None, date(), " ", RepairKind::Damage, Decimal::from(10), "ATU").is_err());
        assert!(Repair::new(None, date(), "dent", RepairKind::Damage, Decimal::from(10), "").is_err());
    }
}
