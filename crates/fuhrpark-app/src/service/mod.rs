//! Application services

mod brand_catalog_service;
mod trip_log_service;
mod user_service;
mod vehicle_service;

pub use brand_catalog_service::BrandCatalogService;
pub use trip_log_service::{TripDisplay, TripLogService};
pub use user_service::UserService;
pub use vehicle_service::VehicleService;
