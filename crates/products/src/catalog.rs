//! Read-only product repository.
//!
//! A `Catalog` is built once at startup and shared (usually behind an `Arc`)
//! with every request handler. It never changes after construction.

use std::collections::HashMap;

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{NewProduct, Product};
use crate::query::ProductQuery;
use crate::seed::seed_products;

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut by_id = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            if by_id.insert(*product.id(), idx).is_some() {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
        }

        Ok(Self { products, by_id })
    }

    /// Validate raw inputs and build a catalog from them.
    pub fn from_new(inputs: Vec<NewProduct>) -> DomainResult<Self> {
        let products = inputs
            .into_iter()
            .map(Product::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(products)
    }

    /// Catalog preloaded with the default seed collection.
    pub fn seeded() -> DomainResult<Self> {
        let catalog = Self::from_new(seed_products())?;
        tracing::info!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, in collection order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> DomainResult<&Product> {
        self.by_id
            .get(&id)
            .map(|&idx| &self.products[idx])
            .ok_or(DomainError::NotFound)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for product in &self.products {
            if !out.contains(&product.category()) {
                out.push(product.category());
            }
        }
        out
    }

    pub fn query(&self, query: &ProductQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }
}
