use std::sync::Arc;

use models::{product::{NewProduct, Product}, Collection};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::{mutate, query, DocumentStore};

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn DocumentStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        query(&*self.store, |doc| doc.products.clone()).await
    }

    /// Products whose category equals `category`, ignoring case.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, ServiceError> {
        query(&*self.store, |doc| {
            doc.products.iter().filter(|p| p.in_category(category)).cloned().collect()
        })
        .await
    }

    pub async fn get(&self, id: u64) -> Result<Product, ServiceError> {
        query(&*self.store, |doc| doc.products.iter().find(|p| p.id == id).cloned())
            .await?
            .ok_or_else(|| ServiceError::not_found("Product"))
    }

    pub async fn create(&self, input: NewProduct) -> Result<Product, ServiceError> {
        input.validate()?;
        let created = mutate(&*self.store, |doc| {
            let product = input.into_product(doc.next_product_id());
            doc.products.push(product.clone());
            Ok(product)
        })
        .await?;
        info!(collection = %Collection::Products, id = created.id, category = %created.category, "product created");
        Ok(created)
    }
}
