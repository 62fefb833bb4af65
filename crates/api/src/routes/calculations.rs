//! Route definitions for calculation history.

use axum::routing::get;
use axum::Router;

use crate::handlers::calculations;
use crate::state::AppState;

/// Calculation history routes mounted at `/api/calculations`.
///
/// ```text
/// GET  /        -> list_calculations
/// POST /        -> create_calculation
/// GET  /latest  -> latest_calculation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(calculations::list_calculations).post(calculations::create_calculation),
        )
        .route("/latest", get(calculations::latest_calculation))
}
