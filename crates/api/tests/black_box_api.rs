use std::collections::HashSet;
use std::sync::Arc;

use catalog_products::{Catalog, Product};
use reqwest::StatusCode;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let catalog = Arc::new(Catalog::seeded().expect("seed catalog is valid"));
        let app = catalog_api::app::build_app(catalog);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn products(&self, query: &str) -> Vec<Product> {
        let res = reqwest::get(format!("{}/api/products{}", self.base_url, query))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "query {query:?}");
        res.json().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn ids(products: &[Product]) -> Vec<u32> {
    products.iter().map(|p| p.product_id().get()).collect()
}

#[tokio::test]
async fn lists_every_product_without_filters() {
    let srv = TestServer::spawn().await;
    let products = srv.products("").await;
    assert_eq!(ids(&products), (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn filters_by_category_case_insensitively() {
    let srv = TestServer::spawn().await;

    let products = srv.products("?category=Electronics").await;
    assert!(products.iter().all(|p| p.category().eq_ignore_ascii_case("electronics")));
    assert_eq!(ids(&products), vec![1, 2, 6, 12]);

    let lower = srv.products("?category=electronics").await;
    assert_eq!(ids(&lower), ids(&products));

    let all = srv.products("?category=all").await;
    assert_eq!(all.len(), 12);
}

#[tokio::test]
async fn filters_by_min_rating() {
    let srv = TestServer::spawn().await;
    let products = srv.products("?minRating=4.7").await;
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| p.rating() >= 4.7));
}

#[tokio::test]
async fn searches_name_description_and_category() {
    let srv = TestServer::spawn().await;
    let products = srv.products("?search=leather").await;
    assert_eq!(ids(&products), vec![5]);
}

#[tokio::test]
async fn sorts_by_price_descending() {
    let srv = TestServer::spawn().await;
    let products = srv.products("?sortBy=price&sortOrder=desc").await;

    let max = products.iter().map(|p| p.price()).fold(f64::MIN, f64::max);
    assert_eq!(products[0].price(), max);
    assert!(products.windows(2).all(|w| w[0].price() >= w[1].price()));
}

#[tokio::test]
async fn malformed_numeric_filters_are_ignored() {
    let srv = TestServer::spawn().await;
    let products = srv
        .products("?minPrice=cheap&maxPrice=&minRating=lots&sortBy=colour")
        .await;
    assert_eq!(ids(&products), (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn unmatched_filters_return_empty_array() {
    let srv = TestServer::spawn().await;
    let products = srv.products("?category=Toys&search=robot").await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn price_range_is_inclusive() {
    let srv = TestServer::spawn().await;
    let products = srv.products("?minPrice=34.99&maxPrice=89.99&sortBy=price").await;
    assert_eq!(products.first().map(|p| p.price()), Some(34.99));
    assert_eq!(products.last().map(|p| p.price()), Some(89.99));
}

#[tokio::test]
async fn get_product_returns_single_record() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/api/products/5", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["id"], 5);
    assert_eq!(body["name"], "Leather Laptop Backpack");
    assert_eq!(body["inStock"], true);
    assert_eq!(body["features"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn unknown_product_is_404_with_fixed_body() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/api/products/999", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Product not found" }));
}

#[tokio::test]
async fn categories_are_distinct() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/api/categories", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let categories: Vec<String> = res.json().await.unwrap();
    let distinct: HashSet<&String> = categories.iter().collect();
    assert_eq!(distinct.len(), categories.len());

    let products = srv.products("").await;
    let expected: HashSet<&str> = products.iter().map(|p| p.category()).collect();
    assert_eq!(categories.len(), expected.len());
    assert_eq!(categories[0], "Electronics");
}

#[tokio::test]
async fn trailing_slash_serves_the_same_resources() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/api/products/?category=Clothing", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let products: Vec<Product> = res.json().await.unwrap();
    assert_eq!(ids(&products), vec![3, 9]);

    let res = reqwest::get(format!("{}/api/categories/", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let categories: Vec<String> = res.json().await.unwrap();
    assert_eq!(categories.len(), 5);
}

#[tokio::test]
async fn category_filter_is_exact_apart_from_case() {
    let srv = TestServer::spawn().await;

    let padded = srv.products("?category=%20Electronics%20").await;
    assert!(padded.is_empty());

    let upper_sentinel = srv.products("?category=ALL").await;
    assert!(upper_sentinel.is_empty());

    let mixed_case = srv.products("?category=eLeCtRoNiCs").await;
    assert_eq!(ids(&mixed_case), vec![1, 2, 6, 12]);
}

#[tokio::test]
async fn invalid_utf8_product_id_is_not_found() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/api/products/%FF", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Product not found" }));
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
