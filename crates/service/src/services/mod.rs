//! Business services, one per collection. Each wraps a shared
//! [`DocumentStore`](crate::storage::DocumentStore) handle.

pub mod category_service;
pub mod product_service;
pub mod favorite_service;
pub mod user_service;

pub use category_service::CategoryService;
pub use favorite_service::FavoriteService;
pub use product_service::ProductService;
pub use user_service::UserService;
