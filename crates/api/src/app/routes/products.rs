use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Extension, Path, Query},
    routing::get,
    Json, Router,
};

use catalog_core::ProductId;
use catalog_products::{Catalog, Product};

use crate::app::dto::ListProductsParams;
use crate::app::errors::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/", get(list_products))
        .route("/products/:id", get(get_product))
        .route("/products/:id/", get(get_product))
}

pub async fn list_products(
    Extension(catalog): Extension<Arc<Catalog>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Product>> {
    let query = ListProductsParams::from_pairs(pairs).into_query();
    let items = catalog
        .query(&query)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    Json(items)
}

pub async fn get_product(
    Extension(catalog): Extension<Arc<Catalog>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    // Undecodable segments (e.g. invalid UTF-8) are just unknown products.
    let Path(id) = id.map_err(|e| {
        tracing::debug!("rejected product id segment: {e}");
        ApiError::ProductNotFound
    })?;

    let id: ProductId = id.parse().map_err(|e| {
        tracing::debug!("unparseable product id: {e}");
        ApiError::ProductNotFound
    })?;

    catalog
        .get(id)
        .cloned()
        .map(Json)
        .map_err(|_| ApiError::ProductNotFound)
}
