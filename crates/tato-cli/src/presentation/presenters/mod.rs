mod cart;
mod catalog;
mod storefront;

pub use cart::{present_cart, present_cart_cleared};
pub use catalog::present_catalog;
pub use storefront::{UiCursor, present_storefront};
