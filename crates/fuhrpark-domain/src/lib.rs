//! Domain layer for fuhrpark
//!
//! Entities validate themselves on construction; no invalid entity is ever
//! observable. Persistence is abstracted behind the repository traits.

pub mod guard;
pub mod model;
pub mod repository;
