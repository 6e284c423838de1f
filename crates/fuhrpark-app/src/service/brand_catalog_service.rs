//! Brand/model master data service

use std::cell::RefCell;

use fuhrpark_domain::model::BrandCatalog;
use fuhrpark_domain::repository::BrandCatalogRepository;
use fuhrpark_types::{Error, Result};

/// Holds the catalog in memory and saves it through on every change.
pub struct BrandCatalogService {
    repo: Box<dyn BrandCatalogRepository>,
    catalog: RefCell<BrandCatalog>,
}

impl BrandCatalogService {
    pub fn new(repo: Box<dyn BrandCatalogRepository>) -> Self {
        let catalog = RefCell::new(repo.load());
        Self { repo, catalog }
    }

    /// All brand names, sorted
    pub fn brands(&self) -> Vec<String> {
        self.catalog
            .borrow()
            .brands()
            .map(|b| b.name().to_string())
            .collect()
    }

    /// Model names of a brand, sorted; empty when the brand is unknown
    pub fn models(&self, brand: &str) -> Vec<String> {
        self.catalog
            .borrow()
            .get(brand)
            .map(|b| b.models())
            .unwrap_or_default()
    }

    pub fn add_brand(&self, name: &str) -> Result<()> {
        self.catalog.borrow_mut().add_brand(name)?;
        self.repo.save(&self.catalog.borrow())
    }

    pub fn add_model(&self, brand: &str, model: &str) -> Result<()> {
        self.catalog.borrow_mut().add_model(brand, model)?;
        self.repo.save(&self.catalog.borrow())
    }

    pub fn is_known_model(&self, brand: &str, model: &str) -> bool {
        self.catalog.borrow().is_known_model(brand, model)
    }

    /// Fail unless the brand/model combination is registered.
    pub fn ensure_known_model(&self, brand: &str, model: &str) -> Result<()> {
        if !self.is_known_model(brand, model) {
            return Err(Error::UnknownReference(format!(
                "brand '{}' / model '{}' is not registered; add it to the master data first",
                brand.trim(),
                model.trim()
            )));
        }
        Ok(())
    }
}
