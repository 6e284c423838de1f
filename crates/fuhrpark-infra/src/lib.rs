//! Infrastructure layer for fuhrpark
//!
//! JSON-file-backed implementations of the domain repository traits. Each
//! repository loads its whole collection at construction and rewrites the
//! whole file on every mutation.

pub mod persistence;

pub use persistence::{
    FileBrandCatalogRepository, FileTripLogRepository, FileUserRepository, FileVehicleRepository,
};
