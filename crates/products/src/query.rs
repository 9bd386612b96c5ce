//! Product query evaluation: conjunctive filters plus an optional stable sort.
//!
//! Everything here is a pure function of `(collection, query)`. Lenient parsing
//! helpers (`parse_bound`, `SortKey::parse`) return `None` for input that should
//! be ignored instead of rejected.

use core::cmp::Ordering;
use core::str::FromStr;

use catalog_core::DomainError;

use crate::product::Product;

/// Category value that disables the category filter.
pub const ALL_CATEGORIES: &str = "all";

/// Field a result set can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Name,
    Brand,
    Category,
    Price,
    Rating,
    Reviews,
    InStock,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Brand,
        SortKey::Category,
        SortKey::Price,
        SortKey::Rating,
        SortKey::Reviews,
        SortKey::InStock,
    ];

    /// Wire name, as accepted in `sortBy`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Brand => "brand",
            SortKey::Category => "category",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
            SortKey::Reviews => "reviews",
            SortKey::InStock => "inStock",
        }
    }

    /// Lenient parse: unknown names yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Ascending comparison of two products on this key.
    ///
    /// Text keys compare case-insensitively.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Id => a.product_id().cmp(&b.product_id()),
            SortKey::Name => cmp_ignore_case(a.name(), b.name()),
            SortKey::Brand => cmp_ignore_case(a.brand(), b.brand()),
            SortKey::Category => cmp_ignore_case(a.category(), b.category()),
            SortKey::Price => a.price().total_cmp(&b.price()),
            SortKey::Rating => a.rating().total_cmp(&b.rating()),
            SortKey::Reviews => a.reviews().cmp(&b.reviews()),
            SortKey::InStock => a.in_stock().cmp(&b.in_stock()),
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown sort field: {s}")))
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction. Anything other than `desc` is ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Parse a numeric bound, ignoring anything that is not a finite number.
pub fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A set of filter and sort directives over the catalog.
///
/// Built with the `with_*` methods, which normalize their input: empty text,
/// the `"all"` category sentinel and non-finite bounds are all dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    category: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    min_rating: Option<f64>,
    search: Option<String>,
    sort_by: Option<SortKey>,
    sort_order: SortOrder,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact case-insensitive category filter. The value is not trimmed, and
    /// only the literal `"all"` (or an empty value) disables the filter.
    pub fn with_category(mut self, category: impl AsRef<str>) -> Self {
        let category = category.as_ref();
        self.category = if category.is_empty() || category == ALL_CATEGORIES {
            None
        } else {
            Some(category.to_lowercase())
        };
        self
    }

    pub fn with_min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min).filter(|v| v.is_finite());
        self
    }

    pub fn with_max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max).filter(|v| v.is_finite());
        self
    }

    pub fn with_min_rating(mut self, min: f64) -> Self {
        self.min_rating = Some(min).filter(|v| v.is_finite());
        self
    }

    pub fn with_search(mut self, term: impl AsRef<str>) -> Self {
        let term = term.as_ref();
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
        self
    }

    pub fn with_sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = Some(key);
        self.sort_order = order;
        self
    }

    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn min_price(&self) -> Option<f64> {
        self.min_price
    }

    pub fn max_price(&self) -> Option<f64> {
        self.max_price
    }

    pub fn min_rating(&self) -> Option<f64> {
        self.min_rating
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn sort_by(&self) -> Option<SortKey> {
        self.sort_by
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// True when the product passes every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_price(product)
            && self.matches_rating(product)
            && self.matches_search(product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        match &self.category {
            Some(category) => product.category().to_lowercase() == *category,
            None => true,
        }
    }

    fn matches_price(&self, product: &Product) -> bool {
        let price = product.price();
        self.min_price.is_none_or(|min| price >= min) && self.max_price.is_none_or(|max| price <= max)
    }

    fn matches_rating(&self, product: &Product) -> bool {
        self.min_rating.is_none_or(|min| product.rating() >= min)
    }

    fn matches_search(&self, product: &Product) -> bool {
        match &self.search {
            Some(term) => [product.name(), product.description(), product.category()]
                .iter()
                .any(|field| field.to_lowercase().contains(term.as_str())),
            None => true,
        }
    }

    /// Filter and order `products`.
    ///
    /// The sort is stable: products with equal keys keep their collection order,
    /// in both directions. Without a sort key the collection order is kept.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut out: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();

        if let Some(key) = self.sort_by {
            let order = self.sort_order;
            out.sort_by(|a, b| order.apply(key.compare(a, b)));
        }

        tracing::debug!(
            total = products.len(),
            matched = out.len(),
            sort_by = ?self.sort_by,
            "evaluated product query"
        );

        out
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
