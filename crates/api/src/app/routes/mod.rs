use axum::{routing::get, Router};

pub mod categories;
pub mod products;
pub mod system;

/// Router for the catalog endpoints (mounted under `/api`).
///
/// Each path is also served with a trailing slash.
pub fn router() -> Router {
    Router::new()
        .merge(products::router())
        .route("/categories", get(categories::list_categories))
        .route("/categories/", get(categories::list_categories))
}
