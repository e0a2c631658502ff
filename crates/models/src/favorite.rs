use serde::{Deserialize, Serialize};

/// A `(user_id, product_id)` pair; the pair itself is the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: i64,
    pub product_id: i64,
}

impl Favorite {
    pub fn new(user_id: i64, product_id: i64) -> Self {
        Self { user_id, product_id }
    }
}
