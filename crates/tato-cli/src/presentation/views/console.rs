use std::fmt;

use crate::presentation::view_models::{CartClearedViewModel, CartViewModel, CatalogViewModel};

// --------------------------------------------------------
// Catalog View
// --------------------------------------------------------

pub struct CatalogView<'a> {
    data: &'a CatalogViewModel,
}

impl<'a> CatalogView<'a> {
    pub fn new(data: &'a CatalogViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CatalogView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.products.is_empty() {
            writeln!(f, "No products match.")?;
            return Ok(());
        }

        writeln!(f, "{:<4} {:<24} {:<10} {:>7}", "ID", "NAME", "CATEGORY", "PRICE")?;
        writeln!(f, "{}", "-".repeat(48))?;

        for product in &self.data.products {
            writeln!(
                f,
                "{:<4} {:<24} {:<10} {:>7}",
                product.id,
                product.name,
                product.category,
                format!("${}", product.price)
            )?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Cart View
// --------------------------------------------------------

pub struct CartView<'a> {
    data: &'a CartViewModel,
}

impl<'a> CartView<'a> {
    pub fn new(data: &'a CartViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CartView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.entries.is_empty() {
            writeln!(f, "Your cart is empty.")?;
            return Ok(());
        }

        for entry in &self.data.entries {
            writeln!(
                f,
                "{:>3}. {:<24} {:>7}",
                entry.index + 1,
                entry.name,
                format!("${}", entry.price)
            )?;
        }
        writeln!(f, "{}", "-".repeat(37))?;
        writeln!(f, "Total: ${}", self.data.total)?;

        Ok(())
    }
}

// --------------------------------------------------------
// Cart Cleared View
// --------------------------------------------------------

pub struct CartClearedView<'a> {
    data: &'a CartClearedViewModel,
}

impl<'a> CartClearedView<'a> {
    pub fn new(data: &'a CartClearedViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CartClearedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data.removed {
            0 => writeln!(f, "Cart was already empty."),
            1 => writeln!(f, "Removed 1 entry."),
            n => writeln!(f, "Removed {} entries.", n),
        }
    }
}
