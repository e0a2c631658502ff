use std::sync::Arc;

use models::{favorite::Favorite, Collection};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::{mutate, query, DocumentStore};

#[derive(Clone)]
pub struct FavoriteService {
    store: Arc<dyn DocumentStore>,
}

impl FavoriteService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<Favorite>, ServiceError> {
        query(&*self.store, |doc| doc.favorites.clone()).await
    }

    /// Record a favorite; each `(user_id, product_id)` pair is stored once.
    pub async fn add(&self, user_id: i64, product_id: i64) -> Result<Favorite, ServiceError> {
        let fav = Favorite::new(user_id, product_id);
        mutate(&*self.store, |doc| {
            if doc.favorites.contains(&fav) {
                return Err(ServiceError::Conflict("Product already in favorites".into()));
            }
            doc.favorites.push(fav);
            Ok(())
        })
        .await?;
        info!(collection = %Collection::Favorites, user_id, product_id, "favorite added");
        Ok(fav)
    }

    pub async fn remove(&self, user_id: i64, product_id: i64) -> Result<Favorite, ServiceError> {
        let fav = Favorite::new(user_id, product_id);
        mutate(&*self.store, |doc| {
            if !doc.favorites.contains(&fav) {
                return Err(ServiceError::not_found("Favorite"));
            }
            doc.favorites.retain(|f| *f != fav);
            Ok(())
        })
        .await?;
        info!(collection = %Collection::Favorites, user_id, product_id, "favorite removed");
        Ok(fav)
    }
}
