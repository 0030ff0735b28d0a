use serde::{Deserialize, Serialize};
use tato_types::{Price, Product};

/// Ordered cart entries. The same product may appear any number of times;
/// entries are independent and addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a persisted cart (JSON array of products).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn add(&mut self, product: Product) {
        self.entries.push(product);
    }

    /// Remove the entry at `index`. Out-of-range indices leave the cart untouched.
    pub fn remove(&mut self, index: usize) -> Option<Product> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Take every entry out, leaving the cart empty.
    pub fn drain(&mut self) -> Vec<Product> {
        std::mem::take(&mut self.entries)
    }

    pub fn total(&self) -> Price {
        self.entries.iter().map(|p| p.price).sum()
    }

    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use tato_types::ProductId;

    fn product(id: u32) -> Product {
        catalog().get(ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_duplicates_are_separate_entries() {
        let mut cart = Cart::new();
        cart.add(product(3));
        cart.add(product(3));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total().to_string(), "14.50");
    }

    #[test]
    fn test_remove_by_position() {
        let mut cart = Cart::new();
        cart.add(product(1));
        cart.add(product(2));
        cart.add(product(1));

        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.id, ProductId::new(2));
        let ids: Vec<u32> = cart.entries().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 1]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(1));

        assert!(cart.remove(1).is_none());
        assert!(cart.remove(usize::MAX).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_then_remove_restores_total() {
        let mut cart = Cart::new();
        cart.add(product(10));
        cart.add(product(4));
        let before = cart.total();

        cart.add(product(20));
        cart.remove(cart.len() - 1);

        assert_eq!(cart.total(), before);
    }

    #[test]
    fn test_empty_total() {
        assert_eq!(Cart::new().total().to_string(), "0.00");
    }

    #[test]
    fn test_json_is_plain_product_array() {
        let mut cart = Cart::new();
        cart.add(product(1));

        let json = cart.to_json().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"price\":\"5.99\""));
        assert_eq!(Cart::from_json(&json).unwrap(), cart);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Cart::from_json("{not json").is_err());
        assert!(Cart::from_json("{\"id\":1}").is_err());
    }
}
