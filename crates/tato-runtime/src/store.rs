//! The storefront view state.
//!
//! One `Storefront` is owned by whoever drives the UI. Every field that
//! affects what is drawn lives here; cart mutations are written through to
//! the key-value store before the call returns.

use std::time::Instant;

use chrono::Utc;
use tato_engine::{Cart, Catalog, CatalogQuery, Checkout, CheckoutState, Wishlist};
use tato_types::{CategoryFilter, Order, OrderId, Price, Product, ProductId};
use tracing::{debug, info, warn};

use crate::storage::KeyValueStore;
use crate::{Config, Result};

/// What a checkout request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Cart was empty; nothing changed.
    Ignored,
    /// A new order was recorded and the confirmation is showing.
    Placed(Order),
}

pub struct Storefront<S> {
    catalog: &'static Catalog,
    store: S,
    cart_key: String,
    cart: Cart,
    wishlist: Wishlist,
    orders: Vec<Order>,
    checkout: Checkout,
    query: CatalogQuery,
    dark_mode: bool,
    show_cart: bool,
    show_success: bool,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Build the initial view state, restoring the cart from `store`.
    ///
    /// A missing cart starts empty. So does an unreadable one: the damage is
    /// logged and the page still opens.
    pub fn open(catalog: &'static Catalog, store: S, config: &Config) -> Self {
        let cart_key = config.storage.cart_key.clone();
        let cart = load_cart(&store, &cart_key);

        Self {
            catalog,
            store,
            cart_key,
            cart,
            wishlist: Wishlist::new(),
            orders: Vec::new(),
            checkout: Checkout::new(config.checkout.confirmation_delay()),
            query: CatalogQuery::default(),
            dark_mode: config.display.dark_mode,
            show_cart: false,
            show_success: false,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- filters ---

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        debug!(search = %self.query.search, "search changed");
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
        debug!(category = %category, "category changed");
    }

    /// Products currently on screen, in catalog order.
    pub fn visible_products(&self) -> Vec<&'static Product> {
        self.query.apply(self.catalog.products())
    }

    // --- cart ---

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Append a copy of the catalog product `id`. Unknown ids are ignored
    /// and reported as `Ok(false)`.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<bool> {
        let Some(product) = self.catalog.get(id) else {
            warn!(product_id = %id, "add to cart for unknown product");
            return Ok(false);
        };

        self.cart.add(product.clone());
        debug!(product_id = %id, entries = self.cart.len(), "added to cart");
        self.persist_cart()?;
        Ok(true)
    }

    /// Remove the entry at `index`; out-of-range indices are a no-op.
    pub fn remove_from_cart(&mut self, index: usize) -> Result<Option<Product>> {
        let Some(removed) = self.cart.remove(index) else {
            debug!(index, entries = self.cart.len(), "remove ignored, index out of range");
            return Ok(None);
        };

        debug!(index, product_id = %removed.id, entries = self.cart.len(), "removed from cart");
        self.persist_cart()?;
        Ok(Some(removed))
    }

    /// Empty the cart. Returns how many entries were removed.
    pub fn clear_cart(&mut self) -> Result<usize> {
        let removed = self.cart.len();
        if removed == 0 {
            return Ok(0);
        }

        self.cart.clear();
        info!(removed, "cart cleared");
        self.persist_cart()?;
        Ok(removed)
    }

    fn persist_cart(&mut self) -> Result<()> {
        let json = self.cart.to_json()?;
        self.store.set(&self.cart_key, &json)
    }

    // --- wishlist ---

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn toggle_wishlist(&mut self, id: ProductId) -> bool {
        let added = self.wishlist.toggle(id);
        debug!(product_id = %id, added, "wishlist toggled");
        added
    }

    // --- view flags ---

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn is_cart_open(&self) -> bool {
        self.show_cart
    }

    pub fn open_cart(&mut self) {
        self.show_cart = true;
    }

    pub fn close_cart(&mut self) {
        self.show_cart = false;
    }

    pub fn is_success_visible(&self) -> bool {
        self.show_success
    }

    // --- checkout ---

    pub fn checkout_state(&self) -> CheckoutState {
        self.checkout.state()
    }

    /// Place an order for everything in the cart.
    ///
    /// An empty cart is silently ignored. Otherwise the emptied cart is saved
    /// first; if that write fails nothing changes and the error is returned.
    /// Then the cart is snapshotted into a new order and the confirmation is
    /// shown until [`Storefront::tick`] sees the delay pass. Checking out
    /// again while confirming restarts the delay.
    pub fn checkout(&mut self, now: Instant) -> Result<CheckoutOutcome> {
        if self.cart.is_empty() {
            debug!("checkout ignored, cart is empty");
            return Ok(CheckoutOutcome::Ignored);
        }

        self.store.set(&self.cart_key, &Cart::new().to_json()?)?;

        let placed_at = Utc::now();
        let total = self.cart.total();
        let order = Order {
            id: OrderId::next_after(self.orders.last().map(|o| o.id), placed_at),
            placed_at,
            items: self.cart.drain(),
            total,
        };
        self.orders.push(order.clone());

        self.show_success = true;
        let ticket = self.checkout.begin(now);
        info!(
            order_id = %order.id,
            items = order.items.len(),
            total = %order.total,
            ticket = ticket.get(),
            "order placed"
        );

        Ok(CheckoutOutcome::Placed(order))
    }

    /// Advance timers. Returns true when the confirmation closed on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(ticket) = self.checkout.poll(now) else {
            return false;
        };

        self.show_success = false;
        self.show_cart = false;
        debug!(ticket = ticket.get(), "order confirmation closed");
        true
    }

    /// Orders placed this session. Not shown anywhere yet.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

fn load_cart(store: &impl KeyValueStore, key: &str) -> Cart {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(err) => {
            warn!(key, error = %err, "could not read saved cart, starting empty");
            return Cart::new();
        }
    };

    match Cart::from_json(&raw) {
        Ok(cart) => {
            debug!(key, entries = cart.len(), "restored saved cart");
            cart
        }
        Err(err) => {
            warn!(key, error = %err, "saved cart is malformed, starting empty");
            Cart::new()
        }
    }
}
