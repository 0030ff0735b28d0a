//! Cart persistence across storefront sessions backed by the data directory.

use std::time::{Duration, Instant};
use tato_engine::catalog;
use tato_runtime::{CheckoutOutcome, Config, FileStore, KeyValueStore, Storefront};
use tato_types::ProductId;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Storefront<FileStore> {
    let store = FileStore::open(dir.path()).expect("open store");
    Storefront::open(catalog(), store, &Config::default())
}

#[test]
fn test_cart_from_previous_session_is_restored() {
    let dir = TempDir::new().unwrap();

    {
        let mut front = open(&dir);
        front.add_to_cart(ProductId::new(3)).unwrap();
        front.add_to_cart(ProductId::new(20)).unwrap();
        front.add_to_cart(ProductId::new(3)).unwrap();
        front.remove_from_cart(1).unwrap();
    }

    let front = open(&dir);
    let ids: Vec<u32> = front.cart().entries().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![3, 3]);
    assert_eq!(front.total().to_string(), "14.50");
}

#[test]
fn test_checkout_clears_persisted_cart() {
    let dir = TempDir::new().unwrap();
    let start = Instant::now();

    {
        let mut front = open(&dir);
        front.add_to_cart(ProductId::new(1)).unwrap();
        let outcome = front.checkout(start).unwrap();
        assert!(matches!(outcome, CheckoutOutcome::Placed(_)));
        assert!(front.tick(start + Duration::from_millis(2500)));
    }

    let front = open(&dir);
    assert!(front.cart().is_empty());
    // Orders and wishlist are session-only
    assert!(front.orders().is_empty());
    assert!(front.wishlist().is_empty());
}

#[test]
fn test_hand_written_cart_is_accepted() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    store
        .set(
            "tato_cart",
            r#"[{"id":11,"name":"Purple Majesty","price":"8.20","category":"Premium","description":"Rich purple potatoes with antioxidants."}]"#,
        )
        .unwrap();
    drop(store);

    let front = open(&dir);
    assert_eq!(front.cart().len(), 1);
    assert_eq!(front.total().to_string(), "8.20");
}

#[test]
fn test_corrupt_cart_value_falls_back_to_empty() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    store.set("tato_cart", "[{\"id\": \"oops\"").unwrap();
    drop(store);

    let mut front = open(&dir);
    assert!(front.cart().is_empty());

    // The next mutation overwrites the corrupt value
    front.add_to_cart(ProductId::new(2)).unwrap();
    drop(front);
    assert_eq!(open(&dir).cart().len(), 1);
}

#[test]
fn test_config_file_in_data_dir_sets_delay() {
    let dir = TempDir::new().unwrap();
    let config_path = Config::path_in(dir.path());
    std::fs::write(&config_path, "[checkout]\nconfirmation_delay_ms = 100\n").unwrap();
    let config = Config::load_from(&config_path).unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    let mut front = Storefront::open(catalog(), store, &config);
    let start = Instant::now();
    front.add_to_cart(ProductId::new(1)).unwrap();
    front.checkout(start).unwrap();

    assert!(front.tick(start + Duration::from_millis(100)));
}
