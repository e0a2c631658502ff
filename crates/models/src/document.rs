//! The single JSON document backing the whole API.
//!
//! Four named collections live at the top level. A `sequences` object keeps
//! the last id handed out per collection so ids never repeat after deletes.
//! Unknown top-level keys are carried through untouched on rewrite.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::category::Category;
use crate::favorite::Favorite;
use crate::product::Product;
use crate::user::AuthenticatedUser;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Products,
    Categories,
    Favorites,
    AuthenticatedUsers,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Categories => "categories",
            Collection::Favorites => "favorites",
            Collection::AuthenticatedUsers => "authenticated_users",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequences {
    #[serde(default)]
    pub products: u64,
    #[serde(default)]
    pub categories: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub favorites: Vec<Favorite>,
    #[serde(default)]
    pub authenticated_users: Vec<AuthenticatedUser>,
    #[serde(default)]
    pub sequences: Sequences,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Allocate the next product id and record it in `sequences`.
    pub fn next_product_id(&mut self) -> u64 {
        let max = self.products.iter().map(|p| p.id).max().unwrap_or(0);
        let next = self.sequences.products.max(max) + 1;
        self.sequences.products = next;
        next
    }

    /// Allocate the next category id and record it in `sequences`.
    pub fn next_category_id(&mut self) -> u64 {
        let max = self.categories.iter().map(|c| c.id).max().unwrap_or(0);
        let next = self.sequences.categories.max(max) + 1;
        self.sequences.categories = next;
        next
    }
}
