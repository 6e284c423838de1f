//! File-based vehicle repository
//!
//! Stores vehicles in `vehicles.json`. The file schema carries the identity
//! fields only; depreciation and repair history is session-scoped and not
//! part of the schema.

use std::cell::RefCell;
use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fuhrpark_domain::model::{Vehicle, VehicleKind};
use fuhrpark_domain::repository::VehicleRepository;
use fuhrpark_types::{Error, Result};

use super::json_store;

/// Written for the variant field that does not apply (cars carry no payload,
/// trucks no seat count).
const NOT_APPLICABLE: u32 = 9999;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct VehicleRecord {
    id: Uuid,
    #[serde(rename = "Type")]
    kind: String,
    license_plate: String,
    brand: String,
    model: String,
    year: i32,
    purchase_value: Decimal,
    seats: u32,
    max_payload_kg: Decimal,
}

impl VehicleRecord {
    fn from_vehicle(vehicle: &Vehicle) -> Self {
        let (seats, max_payload_kg) = match vehicle.kind() {
            VehicleKind::Car { seats } => (*seats, Decimal::from(NOT_APPLICABLE)),
            VehicleKind::Truck { max_payload_kg } => (NOT_APPLICABLE, *max_payload_kg),
        };

        Self {
            id: vehicle.id(),
            kind: vehicle.kind().label().to_string(),
            license_plate: vehicle.license_plate().to_string(),
            brand: vehicle.brand().to_string(),
            model: vehicle.model().to_string(),
            year: vehicle.year(),
            purchase_value: vehicle.purchase_value(),
            seats,
            max_payload_kg,
        }
    }

    fn into_vehicle(self) -> Result<Vehicle> {
        match self.kind.trim().to_uppercase().as_str() {
            "PKW" => Vehicle::car(
                Some(self.id),
                &self.license_plate,
                &self.brand,
                &self.model,
                self.year,
                self.seats,
                self.purchase_value,
            ),
            "LKW" => Vehicle::truck(
                Some(self.id),
                &self.license_plate,
                &self.brand,
                &self.model,
                self.year,
                self.max_payload_kg,
                self.purchase_value,
            ),
            other => Err(Error::UnknownReference(format!(
                "unknown vehicle type '{other}'"
            ))),
        }
    }
}

/// File-based implementation of VehicleRepository
pub struct FileVehicleRepository {
    path: PathBuf,
    vehicles: RefCell<Vec<Vehicle>>,
}

impl FileVehicleRepository {
    /// Create or load a vehicle repository backed by the given file
    pub fn open(path: PathBuf) -> Self {
        let vehicles = json_store::load_records(&path)
            .into_iter()
            .filter_map(|value| serde_json::from_value::<VehicleRecord>(value).ok())
            .filter_map(|record| record.into_vehicle().ok())
            .collect();

        Self {
            path,
            vehicles: RefCell::new(vehicles),
        }
    }

    fn persist(&self) -> Result<()> {
        let records: Vec<VehicleRecord> = self
            .vehicles
            .borrow()
            .iter()
            .map(VehicleRecord::from_vehicle)
            .collect();
        json_store::save(&self.path, &records)
    }

    fn normalize_plate(plate: &str) -> String {
        plate.trim().to_uppercase()
    }
}

impl VehicleRepository for FileVehicleRepository {
    fn all(&self) -> Vec<Vehicle> {
        let mut vehicles: Vec<Vehicle> = self.vehicles.borrow().clone();
        vehicles.sort_by(|a, b| {
            a.brand()
                .cmp(b.brand())
                .then_with(|| a.model().cmp(b.model()))
                .then_with(|| a.license_plate().cmp(b.license_plate()))
        });
        vehicles
    }

    fn find_by_id(&self, id: Uuid) -> Option<Vehicle> {
        self.vehicles.borrow().iter().find(|v| v.id() == id).cloned()
    }

    fn find_by_plate(&self, plate: &str) -> Option<Vehicle> {
        let norm = Self::normalize_plate(plate);
        self.vehicles
            .borrow()
            .iter()
            .find(|v| Self::normalize_plate(v.license_plate()) == norm)
            .cloned()
    }

    fn add(&self, vehicle: Vehicle) -> Result<()> {
        self.vehicles.borrow_mut().push(vehicle);
        self.persist()
    }

    fn update(&self, vehicle: &Vehicle) -> Result<()> {
        let mut vehicles = self.vehicles.borrow_mut();
        let Some(slot) = vehicles.iter_mut().find(|v| v.id() == vehicle.id()) else {
            return Ok(());
        };
        *slot = vehicle.clone();
        drop(vehicles);
        self.persist()
    }

    fn remove(&self, id: Uuid) -> Result<bool> {
        let mut vehicles = self.vehicles.borrow_mut();
        let Some(idx) = vehicles.iter().position(|v| v.id() == id) else {
            return Ok(false);
        };
        vehicles.remove(idx);
        drop(vehicles);
        self.persist()?;
        Ok(true)
    }
}
