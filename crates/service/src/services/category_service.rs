use std::sync::Arc;

use models::{category::{self, Category}, Collection};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::{mutate, query, DocumentStore};

#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn DocumentStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<Category>, ServiceError> {
        query(&*self.store, |doc| doc.categories.clone()).await
    }

    pub async fn get(&self, id: u64) -> Result<Category, ServiceError> {
        query(&*self.store, |doc| doc.categories.iter().find(|c| c.id == id).cloned())
            .await?
            .ok_or_else(|| ServiceError::not_found("Category"))
    }

    /// Add a category; names are unique and compared case-sensitively.
    pub async fn create(&self, name: &str) -> Result<Category, ServiceError> {
        category::validate_name(name)?;
        let created = mutate(&*self.store, |doc| {
            if doc.categories.iter().any(|c| c.name == name) {
                return Err(ServiceError::Conflict("Category already exists".into()));
            }
            let created = Category { id: doc.next_category_id(), name: name.to_string() };
            doc.categories.push(created.clone());
            Ok(created)
        })
        .await?;
        info!(collection = %Collection::Categories, id = created.id, name = %created.name, "category created");
        Ok(created)
    }

    pub async fn remove_by_name(&self, name: &str) -> Result<Category, ServiceError> {
        category::validate_name(name)?;
        self.remove_where(|c| c.name == name).await
    }

    pub async fn remove_by_id(&self, id: u64) -> Result<Category, ServiceError> {
        self.remove_where(|c| c.id == id).await
    }

    async fn remove_where<P>(&self, pred: P) -> Result<Category, ServiceError>
    where
        P: Fn(&Category) -> bool + Send,
    {
        let removed = mutate(&*self.store, move |doc| {
            let found = doc
                .categories
                .iter()
                .find(|&c| pred(c))
                .cloned()
                .ok_or_else(|| ServiceError::not_found("Category"))?;
            doc.categories.retain(|c| !pred(c));
            Ok(found)
        })
        .await?;
        info!(collection = %Collection::Categories, id = removed.id, name = %removed.name, "category removed");
        Ok(removed)
    }
}
