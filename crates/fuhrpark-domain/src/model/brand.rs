//! Brand/model master data
//!
//! Brand and model names are compared case-insensitively throughout; the
//! casing of the first registration is kept for display.

use std::collections::BTreeMap;

use crate::guard;
use fuhrpark_types::Result;

/// A vehicle brand with its set of known models
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    name: String,
    // lowercased name -> name as first registered
    models: BTreeMap<String, String>,
}

impl Brand {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: guard::not_blank(name, "brand name")?,
            models: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a model; false when it was already known (set semantics).
    pub fn add_model(&mut self, model: &str) -> Result<bool> {
        let model = guard::not_blank(model, "model name")?;
        let key = model.to_lowercase();
        if self.models.contains_key(&key) {
            return Ok(false);
        }
        self.models.insert(key, model);
        Ok(true)
    }

    /// Remove a model; false when it was not known.
    pub fn remove_model(&mut self, model: &str) -> Result<bool> {
        let model = guard::not_blank(model, "model name")?;
        Ok(self.models.remove(&model.to_lowercase()).is_some())
    }

    pub fn has_model(&self, model: &str) -> bool {
        self.models.contains_key(&model.trim().to_lowercase())
    }

    /// Model names, sorted
    pub fn models(&self) -> Vec<String> {
        self.models.values().cloned().collect()
    }
}

/// The registry of known brand/model combinations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandCatalog {
    // lowercased brand name -> brand
    brands: BTreeMap<String, Brand>,
}

impl BrandCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a brand; no-op when it already exists.
    pub fn add_brand(&mut self, name: &str) -> Result<()> {
        let brand = Brand::new(name)?;
        self.brands.entry(brand.name().to_lowercase()).or_insert(brand);
        Ok(())
    }

    /// Remove a brand and all its models; false when it was not known.
    pub fn remove_brand(&mut self, name: &str) -> Result<bool> {
        let name = guard::not_blank(name, "brand name")?;
        Ok(self.brands.remove(&name.to_lowercase()).is_some())
    }

    /// Register a model, creating the brand implicitly when absent.
    pub fn add_model(&mut self, brand: &str, model: &str) -> Result<()> {
        let entry = Brand::new(brand)?;
        let slot = self
            .brands
            .entry(entry.name().to_lowercase())
            .or_insert(entry);
        slot.add_model(model)?;
        Ok(())
    }

    /// Remove a model from a brand; false when brand or model was not known.
    pub fn remove_model(&mut self, brand: &str, model: &str) -> Result<bool> {
        let name = guard::not_blank(brand, "brand name")?;
        match self.brands.get_mut(&name.to_lowercase()) {
            Some(b) => b.remove_model(model),
            None => Ok(false),
        }
    }

    pub fn is_known_model(&self, brand: &str, model: &str) -> bool {
        self.get(brand).map(|b| b.has_model(model)).unwrap_or(false)
    }

    pub fn get(&self, brand: &str) -> Option<&Brand> {
        self.brands.get(&brand.trim().to_lowercase())
    }

    /// All brands, sorted by name
    pub fn brands(&self) -> impl Iterator<Item = &Brand> {
        self.brands.values()
    }
}
