//! File-based repository implementations

mod file_brand_catalog_repo;
mod file_trip_log_repo;
mod file_user_repo;
mod file_vehicle_repo;
mod json_store;

pub use file_brand_catalog_repo::FileBrandCatalogRepository;
pub use file_trip_log_repo::FileTripLogRepository;
pub use file_user_repo::FileUserRepository;
pub use file_vehicle_repo::FileVehicleRepository;
