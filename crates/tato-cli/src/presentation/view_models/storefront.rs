//! View model of the interactive storefront screen.
//!
//! Everything here is already formatted for display; views only place it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontViewModel {
    pub theme: ThemeKind,
    pub nav: NavBarViewModel,
    pub grid: ProductGridViewModel,
    /// Present only while the cart drawer is open
    pub cart: Option<CartDrawerViewModel>,
    /// Present only while an order confirmation is showing
    pub success: Option<SuccessOverlayViewModel>,
    pub footer: FooterViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarViewModel {
    pub title: String,
    pub search: String,
    pub search_active: bool,
    pub category: String,
    /// Label of the theme the toggle switches to
    pub theme_toggle: String,
    /// Number of cart entries; `None` when the cart is empty
    pub cart_badge: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGridViewModel {
    pub cards: Vec<ProductCardViewModel>,
    pub focused: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardViewModel {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub wishlisted: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartDrawerViewModel {
    pub lines: Vec<CartLineViewModel>,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineViewModel {
    pub name: String,
    pub price: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessOverlayViewModel {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterViewModel {
    pub text: String,
}
