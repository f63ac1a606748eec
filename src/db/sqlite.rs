use crate::db::models::QuickAccessPair;
use crate::db::schema::SQLITE_INIT;
use crate::error::ExchangeError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

const SELECT_COLUMNS: &str = "SELECT id, from_currency, to_currency, user_id, usage_count \
                              FROM quick_access_pairs";

/// Persistent per-user favorites, ranked by usage.
#[derive(Clone)]
pub struct QuickAccessPairsStorage {
    pool: SqlitePool,
}

impl QuickAccessPairsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and make sure
    /// the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, ExchangeError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ExchangeError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        info!("quick_access_pairs schema ready");
        Ok(())
    }

    /// Insert a pair, replacing every column of an existing row with the same id.
    /// A pair with an unassigned id gets a fresh one. Returns the row id.
    pub async fn insert(&self, pair: &QuickAccessPair) -> Result<i64, ExchangeError> {
        let id = Self::insert_with(&self.pool, pair).await?;
        debug!(
            id,
            user_id = pair.user_id,
            from = %pair.from_currency,
            to = %pair.to_currency,
            usage_count = pair.usage_count,
            "quick-access pair stored"
        );
        Ok(id)
    }

    /// Batch insert using a single transaction. Returns ids in the same order.
    pub async fn insert_many(&self, pairs: &[QuickAccessPair]) -> Result<Vec<i64>, ExchangeError> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(pairs.len());
        for pair in pairs {
            ids.push(Self::insert_with(&mut *tx, pair).await?);
        }
        tx.commit().await?;
        debug!(count = ids.len(), "quick-access pairs stored in batch");
        Ok(ids)
    }

    async fn insert_with<'e, E>(executor: E, pair: &QuickAccessPair) -> Result<i64, ExchangeError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let id = pair.is_persisted().then_some(pair.id);
        let result = sqlx::query(
            r#"
            INSERT OR REPLACE INTO quick_access_pairs (
                id, from_currency, to_currency, user_id, usage_count
            ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&pair.from_currency)
        .bind(&pair.to_currency)
        .bind(pair.user_id)
        .bind(pair.usage_count)
        .execute(executor)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// All pairs owned by `user_id`, most used first. Ties keep id order.
    pub async fn get_pairs(&self, user_id: i64) -> Result<Vec<QuickAccessPair>, ExchangeError> {
        let pairs = sqlx::query_as::<_, QuickAccessPair>(&format!(
            "{SELECT_COLUMNS} WHERE user_id = ? ORDER BY usage_count DESC, id ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(pairs)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<QuickAccessPair>, ExchangeError> {
        let pair = sqlx::query_as::<_, QuickAccessPair>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(pair)
    }

    /// Bump the usage counter by one. Returns `false` when no row has `pair_id`
    /// or its counter is already at `u32::MAX`.
    pub async fn increment_usage_count(&self, pair_id: i64) -> Result<bool, ExchangeError> {
        let result = sqlx::query(
            "UPDATE quick_access_pairs SET usage_count = usage_count + 1 \
             WHERE id = ? AND usage_count < ?",
        )
        .bind(pair_id)
        .bind(u32::MAX)
        .execute(&self.pool)
        .await?;
        let matched = result.rows_affected() > 0;
        debug!(pair_id, matched, "usage count incremented");
        Ok(matched)
    }

    /// Remove the row equal to `pair` in every column. A stale copy (for example
    /// one whose usage count has since been incremented) matches nothing.
    pub async fn delete(&self, pair: &QuickAccessPair) -> Result<bool, ExchangeError> {
        let result = sqlx::query(
            r#"
            DELETE FROM quick_access_pairs
            WHERE id = ? AND from_currency = ? AND to_currency = ?
              AND user_id = ? AND usage_count = ?
            "#,
        )
        .bind(pair.id)
        .bind(&pair.from_currency)
        .bind(&pair.to_currency)
        .bind(pair.user_id)
        .bind(pair.usage_count)
        .execute(&self.pool)
        .await?;
        let removed = result.rows_affected() > 0;
        debug!(id = pair.id, removed, "quick-access pair delete");
        Ok(removed)
    }

    pub async fn delete_by_id(&self, pair_id: i64) -> Result<bool, ExchangeError> {
        let result = sqlx::query("DELETE FROM quick_access_pairs WHERE id = ?")
            .bind(pair_id)
            .execute(&self.pool)
            .await?;
        let removed = result.rows_affected() > 0;
        debug!(pair_id, removed, "quick-access pair delete by id");
        Ok(removed)
    }
}
