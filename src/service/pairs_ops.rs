use crate::db::models::QuickAccessPair;
use crate::db::sqlite::QuickAccessPairsStorage;
use crate::error::ExchangeError;
use tracing::info;

/// Quick-access operations as the UI layer uses them.
#[derive(Clone)]
pub struct PairsOps {
    storage: QuickAccessPairsStorage,
}

impl PairsOps {
    pub async fn connect(database_url: &str) -> Result<Self, ExchangeError> {
        let storage = QuickAccessPairsStorage::connect(database_url).await?;
        info!(database_url, "quick-access storage opened");
        Ok(Self { storage })
    }

    pub fn new(storage: QuickAccessPairsStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &QuickAccessPairsStorage {
        &self.storage
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<QuickAccessPair>, ExchangeError> {
        self.storage.get_pairs(user_id).await
    }

    /// Save a pair and return it with its assigned id.
    pub async fn add(&self, pair: QuickAccessPair) -> Result<QuickAccessPair, ExchangeError> {
        let id = self.storage.insert(&pair).await?;
        Ok(pair.with_id(id))
    }

    /// Record one use of a pair. Returns the updated row, or `None` if it no
    /// longer exists.
    pub async fn select(&self, pair_id: i64) -> Result<Option<QuickAccessPair>, ExchangeError> {
        if !self.storage.increment_usage_count(pair_id).await? {
            return Ok(None);
        }
        self.storage.get_by_id(pair_id).await
    }

    pub async fn remove(&self, pair: &QuickAccessPair) -> Result<bool, ExchangeError> {
        self.storage.delete(pair).await
    }
}
