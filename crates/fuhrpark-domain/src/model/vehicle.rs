//! Fleet vehicles with depreciation and repair bookkeeping

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{DepreciationEntry, Repair};
use crate::guard;
use fuhrpark_types::{Error, RepairKind, Result};

/// Oldest accepted build year
pub const MIN_YEAR: i32 = 1950;

/// Variant-specific vehicle data
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleKind {
    Car { seats: u32 },
    Truck { max_payload_kg: Decimal },
}

impl VehicleKind {
    /// Type tag as used on disk and in listings
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "PKW",
            VehicleKind::Truck { .. } => "LKW",
        }
    }
}

/// A fleet vehicle
///
/// Identity fields are immutable after construction; only the residual value
/// and the owned depreciation/repair lists change, and only through the
/// methods below. The residual value starts at the purchase value and can
/// only decrease, never below zero.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: Uuid,
    license_plate: String,
    brand: String,
    model: String,
    year: i32,
    purchase_value: Decimal,
    residual_value: Decimal,
    kind: VehicleKind,
    depreciations: Vec<DepreciationEntry>,
    repairs: Vec<Repair>,
}

impl Vehicle {
    /// Create a validated car; a fresh id is assigned when none is given.
    pub fn car(
        id: Option<Uuid>,
        license_plate: &str,
        brand: &str,
        model: &str,
        year: i32,
        seats: u32,
        purchase_value: Decimal,
    ) -> Result<Self> {
        let seats = guard::in_range(seats, 1, 9, "seats")?;
        Self::new(
            id,
            license_plate,
            brand,
            model,
            year,
            purchase_value,
            VehicleKind::Car { seats },
        )
    }

    /// Create a validated truck; a fresh id is assigned when none is given.
    pub fn truck(
        id: Option<Uuid>,
        license_plate: &str,
        brand: &str,
        model: &str,
        year: i32,
        max_payload_kg: Decimal,
        purchase_value: Decimal,
    ) -> Result<Self> {
        let max_payload_kg = guard::in_range(
            max_payload_kg,
            Decimal::new(1, 1),
            Decimal::from(100_000),
            "max payload (kg)",
        )?;
        Self::new(
            id,
            license_plate,
            brand,
            model,
            year,
            purchase_value,
            VehicleKind::Truck { max_payload_kg },
        )
    }

    fn new(
        id: Option<Uuid>,
        license_plate: &str,
        brand: &str,
        model: &str,
        year: i32,
        purchase_value: Decimal,
        kind: VehicleKind,
    ) -> Result<Self> {
        let license_plate = guard::not_blank(license_plate, "license plate")?.to_uppercase();
        let brand = guard::not_blank(brand, "brand")?;
        let model = guard::not_blank(model, "model")?;
        let year = guard::in_range(year, MIN_YEAR, Utc::now().year() + 1, "year")?;
        let purchase_value = guard::greater_than_zero(purchase_value, "purchase value")?;

        Ok(Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            license_plate,
            brand,
            model,
            year,
            purchase_value,
            residual_value: purchase_value,
            kind,
            depreciations: Vec::new(),
            repairs: Vec::new(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn purchase_value(&self) -> Decimal {
        self.purchase_value
    }

    pub fn residual_value(&self) -> Decimal {
        self.residual_value
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn depreciations(&self) -> &[DepreciationEntry] {
        &self.depreciations
    }

    pub fn repairs(&self) -> &[Repair] {
        &self.repairs
    }

    /// Book a depreciation, decrementing the residual value.
    ///
    /// Fails without touching any state when the amount is not positive, the
    /// reason is blank, or the amount exceeds the current residual value.
    /// Defaults to today when no date is given.
    pub fn add_depreciation(
        &mut self,
        amount: Decimal,
        reason: &str,
        date: Option<NaiveDate>,
    ) -> Result<()> {
        let entry = DepreciationEntry::new(
            date.unwrap_or_else(|| Utc::now().date_naive()),
            amount,
            reason,
        )?;

        if entry.amount > self.residual_value {
            return Err(Error::ValueUnderflow {
                amount: entry.amount,
                residual: self.residual_value,
            });
        }

        self.residual_value -= entry.amount;
        self.depreciations.push(entry);
        Ok(())
    }

    /// Book a repair; returns the id of the new record.
    pub fn add_repair(
        &mut self,
        date: NaiveDate,
        description: &str,
        kind: RepairKind,
        cost: Decimal,
        workshop: &str,
    ) -> Result<Uuid> {
        let repair = Repair::new(None, date, description, kind, cost, workshop)?;
        let id = repair.id;
        self.repairs.push(repair);
        Ok(id)
    }

    /// Remove a repair by id; false when no such record exists.
    pub fn remove_repair(&mut self, id: Uuid) -> bool {
        match self.repairs.iter().position(|r| r.id == id) {
            Some(idx) => {
                self.repairs.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Sum of all repair costs, zero when none are booked.
    pub fn total_repair_cost(&self) -> Decimal {
        self.repairs.iter().map(|r| r.cost).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golf(plate: &str) -> Vehicle {
        Vehicle::car(None, plate, "VW", "Golf", 2020, 5, Decimal::from(30_000)).unwrap()
    }

    #[test]
    fn plate_is_trimmed_and_upper_cased() {
        let car = golf("  m-ab 123  ");
        assert_eq!(car.license_plate(), "M-AB 123");
    }

    #[test]
    fn residual_starts_at_purchase_value() {
        let car = golf("M-AB 123");
        assert_eq!(car.residual_value(), Decimal::from(30_000));
    }

    #[test]
    fn year_bounds_are_enforced() {
        assert!(Vehicle::car(None, "M-AB 1", "VW", "Golf", 1949, 5, Decimal::from(1000)).is_err());
        let next_year = Utc::now().year() + 1;
        assert!(Vehicle::car(None, "M-AB 1", "VW", "Golf", next_year, 5, Decimal::from(1000)).is_ok());
        assert!(Vehicle::car(None, "M-AB 1", "VW", "Golf", next_year + 1, 5, Decimal::from(1000)).is_err());
    }

    #[test]
    fn seat_and_payload_bounds_are_enforced() {
        assert!(Vehicle::car(None, "M-AB 1", "VW", "Golf", 2020, 0, Decimal::from(1000)).is_err());
        assert!(Vehicle::car(None, "M-AB 1", "VW", "Golf", 2020, 10, Decimal::from(1000)).is_err());
        assert!(Vehicle::truck(None, "M-AB 1", "MAN", "TGX", 2020, Decimal::ZERO, Decimal::from(1000)).is_err());
        assert!(Vehicle::truck(None, "M-AB 1", "MAN", "TGX", 2020, Decimal::from(100_001), Decimal::from(1000)).is_err());
        assert!(Vehicle::truck(None, "M-AB 1", "MAN", "TGX", 2020, Decimal::from(100_000), Decimal::from(1000)).is_ok());
    }

    #[test]
    fn depreciation_decrements_residual_value() {
        let mut car = golf("M-AB 123");
        car.add_depreciation(Decimal::from(5_000), "first year", None).unwrap();
        car.add_depreciation(Decimal::from(2_500), "second year", None).unwrap();
        assert_eq!(car.residual_value(), Decimal::from(22_500));
        assert_eq!(car.depreciations().len(), 2);
    }

    #[test]
    fn depreciation_never_underflows() {
        let mut car = golf("M-AB 123");
        car.add_depreciation(Decimal::from(29_000), "heavy use", None).unwrap();

        let err = car.add_depreciation(Decimal::from(1_001), "too much", None);
        assert!(matches!(err, Err(Error::ValueUnderflow { .. })));

        // the failed booking must not have mutated anything
        assert_eq!(car.residual_value(), Decimal::from(1_000));
        assert_eq!(car.depreciations().len(), 1);

        // draining to exactly zero is allowed
        car.add_depreciation(Decimal::from(1_000), "write-off", None).unwrap();
        assert_eq!(car.residual_value(), Decimal::ZERO);
    }

    #[test]
    fn failed_depreciation_validation_leaves_state_unchanged() {
        let mut car = golf("M-AB 123");
        assert!(car.add_depreciation(Decimal::ZERO, "nothing", None).is_err());
        assert!(car.add_depreciation(Decimal::from(10), "  ", None).is_err());
        assert_eq!(car.residual_value(), Decimal::from(30_000));
        assert!(car.depreciations().is_empty());
    }

    #[test]
    fn repair_bookkeeping() {
        let mut car = golf("M-AB 123");
        assert_eq!(car.total_repair_cost(), Decimal::ZERO);

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let id = car
            .add_repair(date, "windshield", RepairKind::Damage, Decimal::from(400), "Carglass")
            .unwrap();
        car.add_repair(date, "tires", RepairKind::WearPart, Decimal::from(600), "ATU")
            .unwrap();

        assert_eq!(car.total_repair_cost(), Decimal::from(1_000));

        assert!(car.remove_repair(id));
        assert!(!car.remove_repair(id));
        assert_eq!(car.total_repair_cost(), Decimal::from(600));
    }
}
