use tato_engine::Cart;

use crate::presentation::view_models::{CartClearedViewModel, CartEntryRow, CartViewModel};

pub fn present_cart(cart: &Cart) -> CartViewModel {
    CartViewModel {
        entries: cart
            .entries()
            .iter()
            .enumerate()
            .map(|(index, p)| CartEntryRow {
                index,
                id: p.id.get(),
                name: p.name.clone(),
                price: p.price.to_string(),
            })
            .collect(),
        count: cart.len(),
        total: cart.total().to_string(),
    }
}

pub fn present_cart_cleared(removed: usize) -> CartClearedViewModel {
    CartClearedViewModel { removed }
}
