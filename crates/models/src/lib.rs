pub mod errors;
pub mod document;
pub mod product;
pub mod category;
pub mod favorite;
pub mod user;

pub use document::{Collection, Document, Sequences};
