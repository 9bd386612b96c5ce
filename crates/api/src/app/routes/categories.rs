use std::sync::Arc;

use axum::{extract::Extension, Json};

use catalog_products::Catalog;

pub async fn list_categories(Extension(catalog): Extension<Arc<Catalog>>) -> Json<Vec<String>> {
    Json(
        catalog
            .categories()
            .into_iter()
            .map(str::to_owned)
            .collect(),
    )
}
