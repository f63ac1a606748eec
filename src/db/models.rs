use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row id value meaning "let the database assign one".
pub const UNASSIGNED_ID: i64 = 0;

/// A saved currency pair owned by one user, ranked by `usage_count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, FromRow)]
pub struct QuickAccessPair {
    pub id: i64,
    pub from_currency: String,
    pub to_currency: String,
    pub user_id: i64,
    pub usage_count: u32,
}

impl QuickAccessPair {
    /// A pair that has not been stored yet; `insert` assigns its id.
    pub fn new(
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        user_id: i64,
        usage_count: u32,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            user_id,
            usage_count,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNASSIGNED_ID
    }
}
