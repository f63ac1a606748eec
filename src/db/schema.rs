//! SQL DDL for initializing the quick-access pair storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids are never reused after delete
/// - `usage_count` defaulting to 0
/// - an index serving the per-user, usage-ranked listing
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS quick_access_pairs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    from_currency TEXT NOT NULL,
    to_currency TEXT NOT NULL,
    user_id INTEGER NOT NULL,
    usage_count INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_quick_access_pairs_user_usage
    ON quick_access_pairs(user_id, usage_count DESC);
"#;
