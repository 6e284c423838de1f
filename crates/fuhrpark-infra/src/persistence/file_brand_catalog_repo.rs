//! File-based brand catalog repository
//!
//! The catalog is one aggregate: loaded and saved as a whole, sorted by
//! brand and model name on save for deterministic output.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use fuhrpark_domain::model::BrandCatalog;
use fuhrpark_domain::repository::BrandCatalogRepository;
use fuhrpark_types::Result;

use super::json_store;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BrandRecord {
    name: String,
    models: Vec<String>,
}

/// File-based implementation of BrandCatalogRepository
pub struct FileBrandCatalogRepository {
    path: PathBuf,
}

impl FileBrandCatalogRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BrandCatalogRepository for FileBrandCatalogRepository {
    fn load(&self) -> BrandCatalog {
        let mut catalog = BrandCatalog::new();

        for value in json_store::load_records(&self.path) {
            let Ok(record) = serde_json::from_value::<BrandRecord>(value) else {
                continue;
            };
            if catalog.add_brand(&record.name).is_err() {
                continue;
            }
            for model in &record.models {
                // a malformed model name invalidates that model only
                let _ = catalog.add_model(&record.name, model);
            }
        }

        catalog
    }

    fn save(&self, catalog: &BrandCatalog) -> Result<()> {
        let records: Vec<BrandRecord> = catalog
            .brands()
            .map(|brand| BrandRecord {
                name: brand.name().to_string(),
                models: brand.models(),
            })
            .collect();
        json_store::save(&self.path, &records)
    }
}
