//! Interactive storefront sessions against a real data directory.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tato_aisle::context::ExecutionContext;
use tato_aisle::presentation::renderers::StorefrontApp;
use tato_runtime::FileStore;
use tato_testing::{TestWorld, fixtures};

fn open_app(world: &TestWorld) -> StorefrontApp<FileStore> {
    let ctx = ExecutionContext::new(world.data_dir().to_path_buf()).unwrap();
    let mut app = StorefrontApp::new(ctx.open_storefront().unwrap(), 2025);
    app.set_grid_columns(4);
    app
}

fn press(app: &mut StorefrontApp<FileStore>, code: KeyCode, now: Instant) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
}

#[test]
fn test_checkout_with_configured_delay_clears_saved_cart() {
    let world = TestWorld::new()
        .with_config(&fixtures::config_with_delay(300))
        .with_cart(&[3, 3]);
    let mut app = open_app(&world);
    assert_eq!(app.storefront().total().to_string(), "14.50");

    let start = Instant::now();
    press(&mut app, KeyCode::Char('o'), start);
    press(&mut app, KeyCode::Enter, start);
    assert!(app.storefront().is_success_visible());
    assert_eq!(world.saved_cart().unwrap().as_deref(), Some("[]"));

    app.tick(start + Duration::from_millis(299));
    assert!(app.storefront().is_success_visible());

    app.tick(start + Duration::from_millis(300));
    assert!(!app.storefront().is_success_visible());
    assert!(!app.storefront().is_cart_open());
}

#[test]
fn test_cart_built_in_one_session_is_restored_in_the_next() {
    let world = TestWorld::new();
    let now = Instant::now();

    {
        let mut app = open_app(&world);
        press(&mut app, KeyCode::Char('a'), now);
        press(&mut app, KeyCode::Char('l'), now);
        press(&mut app, KeyCode::Char('a'), now);
    }

    let app = open_app(&world);
    let names: Vec<&str> = app
        .storefront()
        .cart()
        .entries()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Golden Crunch Fries", "Creamy Yukon Gold"]);
}
