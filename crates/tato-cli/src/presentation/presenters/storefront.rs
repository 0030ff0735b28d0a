use tato_runtime::{KeyValueStore, Storefront};

use crate::presentation::view_models::{
    CartDrawerViewModel, CartLineViewModel, FooterViewModel, NavBarViewModel,
    ProductCardViewModel, ProductGridViewModel, StorefrontViewModel, SuccessOverlayViewModel,
    ThemeKind,
};

pub const STORE_NAME: &str = "Tato Aisle";

/// Selection state owned by the terminal UI, not by the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiCursor {
    /// Index into the visible product cards
    pub focused: usize,
    /// Index into the cart entries while the drawer is open
    pub cart_selected: usize,
    /// Keystrokes go to the search field
    pub editing_search: bool,
}

pub fn present_storefront<S: KeyValueStore>(
    front: &Storefront<S>,
    cursor: &UiCursor,
    year: i32,
) -> StorefrontViewModel {
    let visible = front.visible_products();
    let focused = clamp_index(cursor.focused, visible.len());

    let cards = visible
        .iter()
        .enumerate()
        .map(|(i, p)| ProductCardViewModel {
            id: p.id.get(),
            name: p.name.clone(),
            description: p.description.clone(),
            price: format!("${}", p.price),
            wishlisted: front.wishlist().contains(p.id),
            focused: Some(i) == focused,
        })
        .collect();

    let cart = front.is_cart_open().then(|| {
        let entries = front.cart().entries();
        let selected = clamp_index(cursor.cart_selected, entries.len());
        CartDrawerViewModel {
            lines: entries
                .iter()
                .enumerate()
                .map(|(i, p)| CartLineViewModel {
                    name: p.name.clone(),
                    price: format!("${}", p.price),
                    selected: Some(i) == selected,
                })
                .collect(),
            total: format!("Total: ${}", front.total()),
        }
    });

    let success = front.is_success_visible().then(|| SuccessOverlayViewModel {
        title: "Order Confirmed!".to_string(),
    });

    let cart_len = front.cart().len();

    StorefrontViewModel {
        theme: if front.is_dark_mode() {
            ThemeKind::Dark
        } else {
            ThemeKind::Light
        },
        nav: NavBarViewModel {
            title: format!("🥔 {}", STORE_NAME),
            search: front.query().search.clone(),
            search_active: cursor.editing_search,
            category: front.query().category.label().to_string(),
            theme_toggle: if front.is_dark_mode() {
                "☀ Light".to_string()
            } else {
                "☾ Dark".to_string()
            },
            cart_badge: (cart_len > 0).then_some(cart_len),
        },
        grid: ProductGridViewModel { cards, focused },
        cart,
        success,
        footer: FooterViewModel {
            text: format!("© {} {}", year, STORE_NAME),
        },
    }
}

fn clamp_index(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(index.min(len - 1))
    }
}
