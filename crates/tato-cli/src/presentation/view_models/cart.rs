use serde::Serialize;
use std::fmt;

use crate::presentation::views::console::{CartClearedView, CartView};

#[derive(Debug, Serialize)]
pub struct CartViewModel {
    pub entries: Vec<CartEntryRow>,
    pub count: usize,
    pub total: String,
}

#[derive(Debug, Serialize)]
pub struct CartEntryRow {
    pub index: usize,
    pub id: u32,
    pub name: String,
    pub price: String,
}

impl fmt::Display for CartViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        CartView::new(self).fmt(f)
    }
}

#[derive(Debug, Serialize)]
pub struct CartClearedViewModel {
    pub removed: usize,
}

impl fmt::Display for CartClearedViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        CartClearedView::new(self).fmt(f)
    }
}
