//! Fleet vehicle service

use std::rc::Rc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::BrandCatalogService;
use fuhrpark_domain::model::Vehicle;
use fuhrpark_domain::repository::VehicleRepository;
use fuhrpark_types::{Error, RepairKind, Result};

/// Vehicle use cases: registration against the brand catalog, bookkeeping,
/// and fleet-wide aggregations.
///
/// Bookkeeping operations fetch the vehicle, mutate it, and persist it in one
/// call so no caller ever holds a dirty aggregate.
pub struct VehicleService {
    vehicles: Rc<dyn VehicleRepository>,
    catalog: Rc<BrandCatalogService>,
}

impl VehicleService {
    pub fn new(vehicles: Rc<dyn VehicleRepository>, catalog: Rc<BrandCatalogService>) -> Self {
        Self { vehicles, catalog }
    }

    /// All vehicles, sorted by brand, model, license plate
    pub fn all(&self) -> Vec<Vehicle> {
        self.vehicles.all()
    }

    pub fn get_required(&self, id: Uuid) -> Result<Vehicle> {
        self.vehicles
            .find_by_id(id)
            .ok_or_else(|| Error::NotFound(format!("vehicle {id}")))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_car(
        &self,
        license_plate: &str,
        brand: &str,
        model: &str,
        year: i32,
        seats: u32,
        purchase_value: Decimal,
    ) -> Result<Uuid> {
        self.catalog.ensure_known_model(brand, model)?;
        self.ensure_unique_plate(license_plate)?;

        let car = Vehicle::car(None, license_plate, brand, model, year, seats, purchase_value)?;
        let id = car.id();
        self.vehicles.add(car)?;
        Ok(id)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_truck(
        &self,
        license_plate: &str,
        brand: &str,
        model: &str,
        year: i32,
        max_payload_kg: Decimal,
        purchase_value: Decimal,
    ) -> Result<Uuid> {
        self.catalog.ensure_known_model(brand, model)?;
        self.ensure_unique_plate(license_plate)?;

        let truck = Vehicle::truck(
            None,
            license_plate,
            brand,
            model,
            year,
            max_payload_kg,
            purchase_value,
        )?;
        let id = truck.id();
        self.vehicles.add(truck)?;
        Ok(id)
    }

    /// Book a depreciation and persist the updated vehicle.
    pub fn add_depreciation(
        &self,
        vehicle_id: Uuid,
        amount: Decimal,
        reason: &str,
        date: Option<NaiveDate>,
    ) -> Result<()> {
        let mut vehicle = self.get_required(vehicle_id)?;
        vehicle.add_depreciation(amount, reason, date)?;
        self.vehicles.update(&vehicle)
    }

    /// Book a repair and persist the updated vehicle; returns the repair id.
    pub fn add_repair(
        &self,
        vehicle_id: Uuid,
        date: NaiveDate,
        description: &str,
        kind: RepairKind,
        cost: Decimal,
        workshop: &str,
    ) -> Result<Uuid> {
        let mut vehicle = self.get_required(vehicle_id)?;
        let repair_id = vehicle.add_repair(date, description, kind, cost, workshop)?;
        self.vehicles.update(&vehicle)?;
        Ok(repair_id)
    }

    /// Remove a repair record; false when the vehicle has no such record.
    pub fn remove_repair(&self, vehicle_id: Uuid, repair_id: Uuid) -> Result<bool> {
        let mut vehicle = self.get_required(vehicle_id)?;
        if !vehicle.remove_repair(repair_id) {
            return Ok(false);
        }
        self.vehicles.update(&vehicle)?;
        Ok(true)
    }

    /// Sum of all residual values
    pub fn fleet_value(&self) -> Decimal {
        self.vehicles
            .all()
            .iter()
            .map(|v| v.residual_value())
            .sum()
    }

    /// Sum of all repair costs across the fleet
    pub fn fleet_repair_cost(&self) -> Decimal {
        self.vehicles
            .all()
            .iter()
            .map(|v| v.total_repair_cost())
            .sum()
    }

    pub fn remove(&self, id: Uuid) -> Result<bool> {
        self.vehicles.remove(id)
    }

    fn ensure_unique_plate(&self, license_plate: &str) -> Result<()> {
        if self.vehicles.plate_exists(license_plate) {
            return Err(Error::Duplicate(format!(
                "license plate '{}'",
                license_plate.trim().to_uppercase()
            )));
        }
        Ok(())
    }
}
