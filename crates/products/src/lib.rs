//! Product catalog domain module.
//!
//! This crate holds the catalog records, the seed collection and the query
//! engine, implemented purely as deterministic domain logic (no IO, no HTTP).

pub mod catalog;
pub mod product;
pub mod query;
pub mod seed;

pub use catalog::Catalog;
pub use product::{NewProduct, Product};
pub use query::{parse_bound, ProductQuery, SortKey, SortOrder, ALL_CATEGORIES};
pub use seed::seed_products;
