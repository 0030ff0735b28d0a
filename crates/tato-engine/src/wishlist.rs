use std::collections::BTreeSet;
use tato_types::ProductId;

/// Favorite product ids for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: BTreeSet<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`; returns whether it is now wishlisted.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::new(7);

        assert!(wishlist.toggle(id));
        assert!(wishlist.contains(id));

        assert!(!wishlist.toggle(id));
        assert!(!wishlist.contains(id));
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId::new(1));
        let before = wishlist.clone();

        for id in [1, 2] {
            wishlist.toggle(ProductId::new(id));
            wishlist.toggle(ProductId::new(id));
        }

        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_no_duplicates() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId::new(5));
        wishlist.toggle(ProductId::new(3));
        wishlist.toggle(ProductId::new(5));
        wishlist.toggle(ProductId::new(5));

        assert_eq!(wishlist.len(), 2);
        let ids: Vec<u32> = wishlist.ids().map(|id| id.get()).collect();
        assert_eq!(ids, vec![3, 5]);
    }
}
