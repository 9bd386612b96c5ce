use catalog_products::{parse_bound, ProductQuery, SortKey, SortOrder};

// -------------------------
// Request DTOs
// -------------------------

/// Raw query string of `GET /api/products`.
///
/// Every field is kept as text so that malformed values can be ignored
/// instead of failing extraction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListProductsParams {
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_rating: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ListProductsParams {
    /// Collect known keys from decoded query pairs. The first occurrence of a
    /// key wins; unknown keys are dropped.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut params.category,
                "minPrice" => &mut params.min_price,
                "maxPrice" => &mut params.max_price,
                "minRating" => &mut params.min_rating,
                "search" => &mut params.search,
                "sortBy" => &mut params.sort_by,
                "sortOrder" => &mut params.sort_order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Map to a domain query, dropping anything that does not parse.
    pub fn into_query(self) -> ProductQuery {
        let mut query = ProductQuery::new();

        if let Some(category) = self.category {
            query = query.with_category(category);
        }
        if let Some(min) = lenient_bound("minPrice", self.min_price.as_deref()) {
            query = query.with_min_price(min);
        }
        if let Some(max) = lenient_bound("maxPrice", self.max_price.as_deref()) {
            query = query.with_max_price(max);
        }
        if let Some(min) = lenient_bound("minRating", self.min_rating.as_deref()) {
            query = query.with_min_rating(min);
        }
        if let Some(search) = self.search {
            query = query.with_search(search);
        }

        let order = self
            .sort_order
            .as_deref()
            .map(SortOrder::parse)
            .unwrap_or_default();
        query = query.with_sort_order(order);

        match self.sort_by.as_deref().map(str::trim) {
            None | Some("") => {}
            Some(raw) => match SortKey::parse(raw) {
                Some(key) => query = query.with_sort(key, order),
                None => tracing::debug!(sort_by = raw, "ignoring unknown sort field"),
            },
        }

        query
    }
}

fn lenient_bound(name: &'static str, raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse_bound(raw);
    if parsed.is_none() {
        tracing::debug!(param = name, value = raw, "ignoring malformed numeric filter");
    }
    parsed
}
