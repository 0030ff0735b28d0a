use serde::Serialize;
use std::fmt;

use crate::presentation::views::console::CatalogView;

#[derive(Debug, Serialize)]
pub struct CatalogViewModel {
    pub search: String,
    pub category: String,
    pub products: Vec<CatalogEntry>,
}

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
}

impl fmt::Display for CatalogViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        CatalogView::new(self).fmt(f)
    }
}
