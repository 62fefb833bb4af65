//! Liveness and history-store readiness at `GET /health`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sleepwise_db::repositories::CalculationRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// `"ok"` when history can be read, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// The pool answered `SELECT 1`.
    pub database: bool,
    /// Rows in `calculations`; `null` when the table could not be read.
    pub history_records: Option<i64>,
}

/// Responds 503 when the history store is unreachable so load balancers
/// stop routing calculations here.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database = sleepwise_db::health_check(&state.pool).await.is_ok();
    let history_records = if database {
        match CalculationRepo::count(&state.pool).await {
            Ok(count) => Some(count),
            Err(e) => {
                tracing::warn!(error = %e, "calculations table unreadable");
                None
            }
        }
    } else {
        None
    };

    let (code, status) = match history_records {
        Some(_) => (StatusCode::OK, "ok"),
        None => (StatusCode::SERVICE_UNAVAILABLE, "degraded"),
    };

    (
        code,
        Json(HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
            history_records,
        }),
    )
}

/// Root-level routes, mounted outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
