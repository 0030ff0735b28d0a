//! Pure storefront logic.
//!
//! Nothing in this crate touches the filesystem, the terminal or the clock;
//! callers pass `Instant`s in and persist whatever they need to.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod filter;
pub mod wishlist;

pub use cart::Cart;
pub use catalog::{Catalog, catalog};
pub use checkout::{Checkout, CheckoutState, Ticket, DEFAULT_CONFIRMATION_DELAY};
pub use filter::{CatalogQuery, filter_products};
pub use wishlist::Wishlist;
