//! File-based trip log repository

use std::cell::RefCell;
use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fuhrpark_domain::model::TripEntry;
use fuhrpark_domain::repository::TripLogRepository;
use fuhrpark_types::Result;

use super::json_store;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TripRecord {
    id: Uuid,
    // serialized as "yyyy-MM-dd"
    date: NaiveDate,
    user_id: Uuid,
    vehicle_id: Uuid,
    reason: String,
    kilometers: Decimal,
}

impl TripRecord {
    fn from_entry(entry: &TripEntry) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            user_id: entry.user_id,
            vehicle_id: entry.vehicle_id,
            reason: entry.reason.clone(),
            kilometers: entry.kilometers,
        }
    }

    fn into_entry(self) -> Result<TripEntry> {
        TripEntry::new(
            Some(self.id),
            self.date,
            self.user_id,
            self.vehicle_id,
            &self.reason,
            self.kilometers,
        )
    }
}

/// File-based implementation of TripLogRepository
pub struct FileTripLogRepository {
    path: PathBuf,
    entries: RefCell<Vec<TripEntry>>,
}

impl FileTripLogRepository {
    /// Create or load a trip log repository backed by the given file
    pub fn open(path: PathBuf) -> Self {
        let entries = json_store::load_records(&path)
            .into_iter()
            .filter_map(|value| serde_json::from_value::<TripRecord>(value).ok())
            .filter_map(|record| record.into_entry().ok())
            .collect();

        Self {
            path,
            entries: RefCell::new(entries),
        }
    }

    fn persist(&self) -> Result<()> {
        let records: Vec<TripRecord> = self
            .entries
            .borrow()
            .iter()
            .map(TripRecord::from_entry)
            .collect();
        json_store::save(&self.path, &records)
    }
}

impl TripLogRepository for FileTripLogRepository {
    fn all(&self) -> Vec<TripEntry> {
        self.entries.borrow().clone()
    }

    fn find_by_id(&self, id: Uuid) -> Option<TripEntry> {
        self.entries.borrow().iter().find(|e| e.id == id).cloned()
    }

    fn add(&self, entry: TripEntry) -> Result<()> {
        self.entries.borrow_mut().push(entry);
        self.persist()
    }

    fn remove(&self, id: Uuid) -> Result<bool> {
        let mut entries = self.entries.borrow_mut();
        let Some(idx) = entries.iter().position(|e| e.id == id) else {
            return Ok(false);
        };
        entries.remove(idx);
        drop(entries);
        self.persist()?;
        Ok(true)
    }
}
