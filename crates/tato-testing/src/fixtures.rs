//! Saved-state fixtures built from the real catalog.

use anyhow::{Context, Result};
use tato_engine::{Cart, catalog};
use tato_types::ProductId;

/// Cart JSON as the storefront would have saved it after adding `ids` in order.
pub fn cart_json(ids: &[u32]) -> Result<String> {
    let mut cart = Cart::new();
    for &id in ids {
        let product = catalog()
            .get(ProductId::new(id))
            .with_context(|| format!("no product with id {}", id))?;
        cart.add(product.clone());
    }
    Ok(cart.to_json()?)
}

/// `config.toml` body that shortens the checkout confirmation.
pub fn config_with_delay(delay_ms: u64) -> String {
    format!("[checkout]\nconfirmation_delay_ms = {}\n", delay_ms)
}
