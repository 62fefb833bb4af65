//! Repository for the `calculations` table.
//!
//! Insert-only: records are never updated or deleted. Reads are ordered
//! newest first by `created_at`, with `id` as the tiebreaker.

use sleepwise_core::sleep_cycle::NewCalculation;
use sqlx::PgPool;

use crate::models::calculation::Calculation;

/// Column list for `calculations` queries.
const COLUMNS: &str = "id, mode, target_time, created_at";

/// Newest-first ordering shared by every read.
const NEWEST_FIRST: &str = "ORDER BY created_at DESC NULLS LAST, id DESC";

/// Number of records returned by the history listing.
pub const RECENT_HISTORY_LIMIT: i64 = 10;

/// Provides data access for calculation history.
pub struct CalculationRepo;

impl CalculationRepo {
    /// Append a history record. The database assigns `id` and `created_at`.
    pub async fn append(pool: &PgPool, input: &NewCalculation) -> Result<Calculation, sqlx::Error> {
        let query = format!(
            "INSERT INTO calculations (mode, target_time) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Calculation>(&query)
            .bind(input.direction.as_str())
            .bind(input.target_time_text())
            .fetch_one(pool)
            .await
    }

    /// List up to `limit` records, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Calculation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM calculations {NEWEST_FIRST} LIMIT $1");
        sqlx::query_as::<_, Calculation>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// The most recent record, or `None` if the history is empty.
    pub async fn latest(pool: &PgPool) -> Result<Option<Calculation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM calculations {NEWEST_FIRST} LIMIT 1");
        sqlx::query_as::<_, Calculation>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Number of stored records.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM calculations")
            .fetch_one(pool)
            .await
    }
}
