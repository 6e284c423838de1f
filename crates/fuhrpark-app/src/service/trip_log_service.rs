//! Trip log service

use std::rc::Rc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use fuhrpark_domain::model::TripEntry;
use fuhrpark_domain::repository::{TripLogRepository, UserRepository, VehicleRepository};
use fuhrpark_types::{Error, Result};

/// Trip log use cases
///
/// Referential integrity is enforced at write time only: removing a user or
/// vehicle later leaves a dangling id, which the display projection renders
/// with a placeholder.
pub struct TripLogService {
    trips: Rc<dyn TripLogRepository>,
    users: Rc<dyn UserRepository>,
    vehicles: Rc<dyn VehicleRepository>,
}

/// A trip entry with its foreign keys resolved to display text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripDisplay {
    pub id: Uuid,
    pub date: NaiveDate,
    pub user: String,
    pub vehicle: String,
    pub reason: String,
    pub kilometers: Decimal,
}

impl TripLogService {
    pub fn new(
        trips: Rc<dyn TripLogRepository>,
        users: Rc<dyn UserRepository>,
        vehicles: Rc<dyn VehicleRepository>,
    ) -> Self {
        Self {
            trips,
            users,
            vehicles,
        }
    }

    /// All entries, newest first; id breaks ties for a stable order
    pub fn all(&self) -> Vec<TripEntry> {
        let mut entries = self.trips.all();
        entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        entries
    }

    pub fn by_user(&self, user_id: Uuid) -> Vec<TripEntry> {
        self.all()
            .into_iter()
            .filter(|t| t.user_id == user_id)
            .collect()
    }

    pub fn by_vehicle(&self, vehicle_id: Uuid) -> Vec<TripEntry> {
        self.all()
            .into_iter()
            .filter(|t| t.vehicle_id == vehicle_id)
            .collect()
    }

    /// Entries with `from <= date <= to`
    pub fn by_date_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<TripEntry> {
        self.all()
            .into_iter()
            .filter(|t| t.date >= from && t.date <= to)
            .collect()
    }

    /// Record a trip after checking that user and vehicle exist.
    pub fn add_trip(
        &self,
        date: NaiveDate,
        user_id: Uuid,
        vehicle_id: Uuid,
        reason: &str,
        kilometers: Decimal,
    ) -> Result<Uuid> {
        if self.users.find_by_id(user_id).is_none() {
            return Err(Error::UnknownReference(format!(
                "user {user_id} does not exist"
            )));
        }
        if self.vehicles.find_by_id(vehicle_id).is_none() {
            return Err(Error::UnknownReference(format!(
                "vehicle {vehicle_id} does not exist"
            )));
        }

        let entry = TripEntry::new(None, date, user_id, vehicle_id, reason, kilometers)?;
        let id = entry.id;
        self.trips.add(entry)?;
        Ok(id)
    }

    pub fn remove(&self, id: Uuid) -> Result<bool> {
        self.trips.remove(id)
    }

    /// Resolve the foreign keys of an entry for display; deleted references
    /// degrade to a short-id placeholder instead of failing.
    pub fn to_display(&self, entry: &TripEntry) -> TripDisplay {
        let user = self
            .users
            .find_by_id(entry.user_id)
            .map(|u| u.display_name())
            .unwrap_or_else(|| format!("[user {}]", short_id(entry.user_id)));

        let vehicle = self
            .vehicles
            .find_by_id(entry.vehicle_id)
            .map(|v| format!("{} ({} {})", v.license_plate(), v.brand(), v.model()))
            .unwrap_or_else(|| format!("[vehicle {}]", short_id(entry.vehicle_id)));

        TripDisplay {
            id: entry.id,
            date: entry.date,
            user,
            vehicle,
            reason: entry.reason.clone(),
            kilometers: entry.kilometers,
        }
    }
}

fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}
