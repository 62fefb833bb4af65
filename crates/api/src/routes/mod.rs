pub mod calculations;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /calculations                 list recent (GET), append (POST)
/// /calculations/latest          most recent record or null (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/calculations", calculations::router())
}
