use tato_engine::CatalogQuery;
use tato_types::Product;

use crate::presentation::view_models::{CatalogEntry, CatalogViewModel};

pub fn present_catalog(query: &CatalogQuery, products: &[&Product]) -> CatalogViewModel {
    CatalogViewModel {
        search: query.search.clone(),
        category: query.category.label().to_string(),
        products: products
            .iter()
            .map(|p| CatalogEntry {
                id: p.id.get(),
                name: p.name.clone(),
                category: p.category.to_string(),
                price: p.price.to_string(),
                description: p.description.clone(),
            })
            .collect(),
    }
}
