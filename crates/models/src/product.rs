use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// Product fields supplied by a client; the id is assigned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("Name of the product is required".into()));
        }
        if self.category.trim().is_empty() {
            return Err(ModelError::Validation("Category of the product is required".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ModelError::Validation("Price of the product must be a non-negative number".into()));
        }
        Ok(())
    }

    pub fn into_product(self, id: u64) -> Product {
        Product { id, name: self.name, category: self.category, price: self.price }
    }
}

impl Product {
    /// Case-insensitive exact match on the category field.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}
