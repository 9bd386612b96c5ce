use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, Entity, ProductId};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// Input for building a [`Product`]; validated by `Product::try_from`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub rating: f64,
    pub reviews: u32,
    pub image: String,
    pub in_stock: bool,
    pub brand: String,
    pub features: Vec<String>,
}

/// Catalog record. Immutable once built.
///
/// Deserialization goes through `NewProduct` so the same checks apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NewProduct")]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: f64,
    category: String,
    rating: f64,
    reviews: u32,
    image: String,
    in_stock: bool,
    brand: String,
    features: Vec<String>,
}

impl Product {
    pub fn product_id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn reviews(&self) -> u32 {
        self.reviews
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<NewProduct> for Product {
    type Error = DomainError;

    fn try_from(input: NewProduct) -> Result<Self, Self::Error> {
        if input.id == 0 {
            return Err(DomainError::invariant("product id must be positive"));
        }

        if input.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                input.id
            )));
        }

        if !input.price.is_finite() || input.price < 0.0 {
            return Err(DomainError::invariant(format!(
                "product {}: price must be a non-negative number",
                input.id
            )));
        }

        if !(0.0..=MAX_RATING).contains(&input.rating) {
            return Err(DomainError::invariant(format!(
                "product {}: rating must be within 0..={MAX_RATING}",
                input.id
            )));
        }

        Ok(Self {
            id: ProductId::new(input.id),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            rating: input.rating,
            reviews: input.reviews,
            image: input.image,
            in_stock: input.in_stock,
            brand: input.brand,
            features: input.features,
        })
    }
}
