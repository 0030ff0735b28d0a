use tato_types::{CategoryFilter, Product};

/// Search text plus category selector, as typed into the nav bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub category: CategoryFilter,
}

impl CatalogQuery {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Category matches (or `All`) and the name contains the search text,
    /// ignoring case. Empty search matches every name.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category) && name_contains(&product.name, &self.search)
    }

    /// Stable filter over `products`; catalog order is preserved.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

pub fn filter_products<'a>(
    products: &'a [Product],
    search: &str,
    category: CategoryFilter,
) -> Vec<&'a Product> {
    CatalogQuery::new(search, category).apply(products)
}

fn name_contains(name: &str, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&search.to_lowercase())
}
