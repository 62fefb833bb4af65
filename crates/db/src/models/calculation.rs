//! History record model for the `calculations` table.

use serde::Serialize;
use sleepwise_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `calculations` table.
///
/// Serialized as `{ id, mode, targetTime, createdAt }`; `mode` carries the
/// direction (`wakeup` / `bedtime`). Rows are immutable once inserted.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub id: DbId,
    pub mode: String,
    pub target_time: String,
    pub created_at: Option<Timestamp>,
}
