//! Domain entity definitions

mod brand;
mod depreciation;
mod repair;
mod trip;
mod user;
mod vehicle;

pub use brand::{Brand, BrandCatalog};
pub use depreciation::DepreciationEntry;
pub use repair::Repair;
pub use trip::TripEntry;
pub use user::User;
pub use vehicle::{Vehicle, VehicleKind, MIN_YEAR};
