//! Fail-fast validation helpers
//!
//! Every entity constructor routes user input through these before any state
//! is touched.

use std::fmt::Display;

use fuhrpark_types::{Error, Result};

/// Require a non-blank string; returns the trimmed value.
pub fn not_blank(value: &str, name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Blank(name.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Require `min <= value <= max`; returns the value unchanged.
pub fn in_range<T>(value: T, min: T, max: T, name: &str) -> Result<T>
where
    T: PartialOrd + Display,
{
    if value < min || value > max {
        return Err(Error::OutOfRange {
            name: name.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(value)
}

/// Require a strictly positive value; returns the value unchanged.
pub fn greater_than_zero<T>(value: T, name: &str) -> Result<T>
where
    T: PartialOrd + Default + Display,
{
    if value <= T::default() {
        return Err(Error::NotPositive(name.to_string()));
    }
    Ok(value)
}
