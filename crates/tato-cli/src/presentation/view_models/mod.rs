pub mod cart;
pub mod catalog;
pub mod common;
pub mod result;
pub mod storefront;

pub use cart::{CartClearedViewModel, CartEntryRow, CartViewModel};
pub use catalog::{CatalogEntry, CatalogViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use result::CommandResultViewModel;
pub use storefront::{
    CartDrawerViewModel, CartLineViewModel, FooterViewModel, NavBarViewModel,
    ProductCardViewModel, ProductGridViewModel, StorefrontViewModel, SuccessOverlayViewModel,
    ThemeKind,
};
