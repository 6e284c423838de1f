//! Repository trait definitions for data persistence
//!
//! Repositories hold the full collection for their entity family in memory;
//! reads are infallible snapshots, mutations persist immediately.

use uuid::Uuid;

use crate::model::{BrandCatalog, TripEntry, User, Vehicle};
use fuhrpark_types::Result;

/// Repository for fleet vehicles
pub trait VehicleRepository {
    /// Snapshot of all vehicles, sorted by brand, model, license plate
    fn all(&self) -> Vec<Vehicle>;

    fn find_by_id(&self, id: Uuid) -> Option<Vehicle>;

    /// Exact match after trim + upper-case normalization
    fn find_by_plate(&self, plate: &str) -> Option<Vehicle>;

    fn plate_exists(&self, plate: &str) -> bool {
        self.find_by_plate(plate).is_some()
    }

    /// Add and persist a vehicle
    fn add(&self, vehicle: Vehicle) -> Result<()>;

    /// Replace the stored vehicle with the same id and persist; no-op when absent
    fn update(&self, vehicle: &Vehicle) -> Result<()>;

    /// Remove by id; false when no such vehicle exists
    fn remove(&self, id: Uuid) -> Result<bool>;
}

/// Repository for users
pub trait UserRepository {
    /// Snapshot of all users, insertion order
    fn all(&self) -> Vec<User>;

    fn find_by_id(&self, id: Uuid) -> Option<User>;

    /// Add and persist a user; an add with an already-stored id is ignored
    fn add(&self, user: User) -> Result<()>;

    /// Remove by id; false when no such user exists
    fn remove(&self, id: Uuid) -> Result<bool>;
}

/// Repository for trip log entries
pub trait TripLogRepository {
    /// Snapshot of all entries, insertion order
    fn all(&self) -> Vec<TripEntry>;

    fn find_by_id(&self, id: Uuid) -> Option<TripEntry>;

    /// Add and persist an entry
    fn add(&self, entry: TripEntry) -> Result<()>;

    /// Remove by id; false when no such entry exists
    fn remove(&self, id: Uuid) -> Result<bool>;
}

/// Repository for the brand/model catalog, persisted as one aggregate
pub trait BrandCatalogRepository {
    /// Load the whole catalog; empty when nothing was stored yet
    fn load(&self) -> BrandCatalog;

    /// Persist the whole catalog
    fn save(&self, catalog: &BrandCatalog) -> Result<()>;
}
