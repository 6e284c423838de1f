//! Application layer for fuhrpark
//!
//! Services wire the domain entities to the repositories and enforce the
//! cross-entity rules: known brand/model combinations, unique license plates
//! and display names, and referential checks for trip entries.

pub mod config;
pub mod service;

pub use service::{
    BrandCatalogService, TripDisplay, TripLogService, UserService, VehicleService,
};
