//! Interactive storefront.
//!
//! `StorefrontApp` owns the storefront state plus the UI-only cursor and
//! turns key presses into storefront calls. `TuiRenderer` owns the terminal
//! and the event loop: draw, poll input, advance timers.
//!
//! ## Design:
//! - Storefront state is mutated only from the event loop thread
//! - Every frame is drawn from a fresh `StorefrontViewModel`
//! - The checkout confirmation closes itself on a later tick

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};
use tato_runtime::{CheckoutOutcome, KeyValueStore, Storefront};
use tato_types::ProductId;
use tracing::{error, info};

use crate::presentation::presenters::{UiCursor, present_storefront};
use crate::presentation::view_models::StorefrontViewModel;
use crate::presentation::views::tui::{
    CartDrawerView, FooterView, NavBarView, ProductGridView, SuccessOverlayView, grid_columns,
    palette,
};

const TICK_RATE: Duration = Duration::from_millis(100);

pub struct StorefrontApp<S> {
    front: Storefront<S>,
    cursor: UiCursor,
    grid_columns: usize,
    year: i32,
    should_quit: bool,
}

impl<S: KeyValueStore> StorefrontApp<S> {
    pub fn new(front: Storefront<S>, year: i32) -> Self {
        Self {
            front,
            cursor: UiCursor::default(),
            grid_columns: 1,
            year,
            should_quit: false,
        }
    }

    pub fn storefront(&self) -> &Storefront<S> {
        &self.front
    }

    pub fn cursor(&self) -> &UiCursor {
        &self.cursor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Columns the grid is currently laid out in; arrow keys move by rows of this size.
    pub fn set_grid_columns(&mut self, columns: usize) {
        self.grid_columns = columns.max(1);
    }

    pub fn view_model(&self) -> StorefrontViewModel {
        present_storefront(&self.front, &self.cursor, self.year)
    }

    pub fn tick(&mut self, now: Instant) {
        self.front.tick(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // The confirmation has no dismiss action; it closes on its own.
        if self.front.is_success_visible() {
            if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        if self.cursor.editing_search {
            self.handle_search_key(key);
        } else if self.front.is_cart_open() {
            self.handle_cart_key(key, now);
        } else {
            self.handle_browse_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let mut search = self.front.query().search.clone();
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.cursor.editing_search = false;
                return;
            }
            KeyCode::Backspace => {
                search.pop();
            }
            KeyCode::Char(c) => search.push(c),
            _ => return,
        }
        self.front.set_search(search);
        self.cursor.focused = 0;
    }

    fn handle_cart_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('o') => self.front.close_cart(),
            KeyCode::Char('t') => self.front.toggle_dark_mode(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor.cart_selected = self.cursor.cart_selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.front.cart().len().saturating_sub(1);
                self.cursor.cart_selected = (self.cursor.cart_selected + 1).min(last);
            }
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                if let Err(err) = self.front.remove_from_cart(self.cursor.cart_selected) {
                    error!(error = %err, "failed to save cart");
                }
                let last = self.front.cart().len().saturating_sub(1);
                self.cursor.cart_selected = self.cursor.cart_selected.min(last);
            }
            KeyCode::Enter => match self.front.checkout(now) {
                Ok(CheckoutOutcome::Placed(order)) => {
                    info!(order_id = %order.id, "checkout complete");
                    self.cursor.cart_selected = 0;
                }
                Ok(CheckoutOutcome::Ignored) => {}
                Err(err) => error!(error = %err, "failed to save cart after checkout"),
            },
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let visible = self.front.visible_products().len();
        let columns = self.grid_columns;

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.cursor.editing_search = true,
            KeyCode::Char('c') => {
                self.front.set_category(self.front.query().category.next());
                self.cursor.focused = 0;
            }
            KeyCode::Char('C') => {
                self.front.set_category(self.front.query().category.previous());
                self.cursor.focused = 0;
            }
            KeyCode::Char('t') => self.front.toggle_dark_mode(),
            KeyCode::Char('o') => {
                self.front.open_cart();
                self.cursor.cart_selected = 0;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor.focused = self.cursor.focused.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_focus_to(self.cursor.focused + 1, visible);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor.focused = self.cursor.focused.saturating_sub(columns);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_focus_to(self.cursor.focused + columns, visible);
            }
            KeyCode::Char('a') | KeyCode::Enter => {
                if let Some(id) = self.focused_product() {
                    if let Err(err) = self.front.add_to_cart(id) {
                        error!(error = %err, "failed to save cart");
                    }
                }
            }
            KeyCode::Char('w') => {
                if let Some(id) = self.focused_product() {
                    self.front.toggle_wishlist(id);
                }
            }
            _ => {}
        }
    }

    fn move_focus_to(&mut self, index: usize, visible: usize) {
        if index < visible {
            self.cursor.focused = index;
        }
    }

    fn focused_product(&self) -> Option<ProductId> {
        let visible = self.front.visible_products();
        visible
            .get(self.cursor.focused.min(visible.len().saturating_sub(1)))
            .map(|p| p.id)
    }
}

/// Lay out one frame: nav bar, product grid, footer, then the drawer and
/// confirmation on top when present.
pub fn draw(f: &mut Frame, screen: &StorefrontViewModel) {
    let colors = palette(screen.theme);
    let size = f.area();

    f.render_widget(
        Block::default().style(Style::default().fg(colors.foreground).bg(colors.background)),
        size,
    );

    let chunks = Layout::vertical([
        Constraint::Length(2), // Nav bar
        Constraint::Min(3),    // Product grid
        Constraint::Length(2), // Footer
    ])
    .split(size);

    f.render_widget(NavBarView::new(&screen.nav, colors), chunks[0]);
    f.render_widget(ProductGridView::new(&screen.grid, colors), chunks[1]);
    f.render_widget(FooterView::new(&screen.footer, colors), chunks[2]);

    if let Some(cart) = &screen.cart {
        f.render_widget(CartDrawerView::new(cart, colors), size);
    }

    if let Some(success) = &screen.success {
        f.render_widget(SuccessOverlayView::new(success, colors), size);
    }
}

pub struct TuiRenderer;

impl TuiRenderer {
    /// Take over the terminal and run the storefront until the user quits.
    pub fn run<S: KeyValueStore>(mut app: StorefrontApp<S>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = Self::event_loop(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend, S: KeyValueStore>(
        terminal: &mut Terminal<B>,
        app: &mut StorefrontApp<S>,
    ) -> Result<()> {
        while !app.should_quit() {
            let width = terminal.size()?.width;
            app.set_grid_columns(grid_columns(width));

            let screen = app.view_model();
            terminal.draw(|f| draw(f, &screen))?;

            if event::poll(TICK_RATE)?
                && let Event::Key(key) = event::read()?
            {
                app.handle_key(key, Instant::now());
            }

            app.tick(Instant::now());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use tato_engine::catalog;
    use tato_runtime::{Config, MemoryStore};

    fn app() -> StorefrontApp<MemoryStore> {
        let front = Storefront::open(catalog(), MemoryStore::new(), &Config::default());
        let mut app = StorefrontApp::new(front, 2025);
        app.set_grid_columns(4);
        app
    }

    fn press(app: &mut StorefrontApp<MemoryStore>, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn screen_text(app: &StorefrontApp<MemoryStore>) -> String {
        screen_text_sized(app, 130, 40)
    }

    fn screen_text_sized(app: &StorefrontApp<MemoryStore>, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let screen = app.view_model();
        terminal.draw(|f| draw(f, &screen)).unwrap();

        let buf = terminal.backend().buffer();
        crate::presentation::views::tui::test_support::rows(buf).join("\n")
    }

    #[test]
    fn test_add_focused_product_twice() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('j'), now); // row 2, col 0 -> index 4
        press(&mut app, KeyCode::Char('h'), now); // index 3
        press(&mut app, KeyCode::Right, now); // index 4
        press(&mut app, KeyCode::Char('h'), now);
        press(&mut app, KeyCode::Char('h'), now);
        press(&mut app, KeyCode::Char('a'), now);
        press(&mut app, KeyCode::Enter, now);

        let cart = app.storefront().cart();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.entries()[0].name, "Sweet Sunset Gems");
        assert_eq!(app.storefront().total().to_string(), "14.50");
    }

    #[test]
    fn test_search_mode_captures_letters() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('/'), now);
        for c in "qtruf".chars() {
            press(&mut app, KeyCode::Char(c), now);
        }
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Char('t'), now);
        press(&mut app, KeyCode::Char('r'), now);
        press(&mut app, KeyCode::Char('u'), now);
        press(&mut app, KeyCode::Enter, now);

        // 'q' and 't' were typed, not treated as quit / theme toggle
        assert!(!app.should_quit());
        assert!(!app.storefront().is_dark_mode());
        assert_eq!(app.storefront().query().search, "qtru");
        assert!(!app.cursor().editing_search);

        // "qtru" matches nothing; clear it down to "tru"
        press(&mut app, KeyCode::Char('/'), now);
        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace, now);
        }
        for c in "tru".chars() {
            press(&mut app, KeyCode::Char(c), now);
        }
        press(&mut app, KeyCode::Esc, now);

        let names: Vec<&str> = app
            .storefront()
            .visible_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Truffle Luxury Box"]);
    }

    #[test]
    fn test_category_cycle_and_wishlist() {
        let now = Instant::now();
        let mut app = app();
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('c'), now); // Fresh, Fries, Premium
        }
        assert_eq!(app.storefront().query().category.label(), "Premium");
        assert_eq!(app.storefront().visible_products().len(), 5);

        press(&mut app, KeyCode::Char('w'), now);
        assert!(app.storefront().wishlist().contains(ProductId::new(10)));
        press(&mut app, KeyCode::Char('w'), now);
        assert!(app.storefront().wishlist().is_empty());

        press(&mut app, KeyCode::Char('C'), now);
        assert_eq!(app.storefront().query().category.label(), "Fries");
    }

    #[test]
    fn test_cart_remove_and_checkout_flow() {
        let start = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('a'), start);
        press(&mut app, KeyCode::Char('l'), start);
        press(&mut app, KeyCode::Char('a'), start);
        press(&mut app, KeyCode::Char('o'), start);
        assert!(app.storefront().is_cart_open());

        press(&mut app, KeyCode::Down, start);
        press(&mut app, KeyCode::Char('d'), start);
        assert_eq!(app.storefront().cart().len(), 1);
        assert_eq!(app.cursor().cart_selected, 0);

        press(&mut app, KeyCode::Enter, start);
        assert!(app.storefront().is_success_visible());
        assert_eq!(app.storefront().orders().len(), 1);
        assert_eq!(app.storefront().orders()[0].total.to_string(), "5.99");

        // Keys other than quit are ignored while the confirmation shows
        press(&mut app, KeyCode::Esc, start);
        assert!(app.storefront().is_cart_open());

        app.tick(start + Duration::from_millis(2500));
        assert!(!app.storefront().is_success_visible());
        assert!(!app.storefront().is_cart_open());
    }

    #[test]
    fn test_empty_cart_checkout_is_silent() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('o'), now);
        press(&mut app, KeyCode::Enter, now);

        assert!(app.storefront().orders().is_empty());
        assert!(!app.storefront().is_success_visible());
        assert!(app.storefront().is_cart_open());
    }

    #[test]
    fn test_focus_stays_inside_grid() {
        let now = Instant::now();
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Down, now);
        }
        assert_eq!(app.cursor().focused, 16);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right, now);
        }
        assert_eq!(app.cursor().focused, 19);
        press(&mut app, KeyCode::Up, now);
        assert_eq!(app.cursor().focused, 15);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'), Instant::now());
        assert!(app.should_quit());

        let mut app = self::app();
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn test_long_cart_keeps_selected_entry_on_screen() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Char('/'), now);
        for c in "golden".chars() {
            press(&mut app, KeyCode::Char(c), now);
        }
        press(&mut app, KeyCode::Enter, now);
        for _ in 0..30 {
            press(&mut app, KeyCode::Char('a'), now);
        }
        assert!(app.front.add_to_cart(ProductId::new(2)).unwrap());

        press(&mut app, KeyCode::Char('o'), now);
        for _ in 0..40 {
            press(&mut app, KeyCode::Down, now);
        }
        assert_eq!(app.cursor().cart_selected, 30);
        // 31 entries do not fit in a 24-row drawer
        assert!(screen_text_sized(&app, 100, 24).contains("Creamy Yukon Gold"));

        press(&mut app, KeyCode::Char('d'), now);
        let cart = app.storefront().cart();
        assert_eq!(cart.len(), 30);
        assert!(cart.entries().iter().all(|p| p.name == "Golden Crunch Fries"));
    }

    #[test]
    fn test_draws_full_screen() {
        let now = Instant::now();
        let mut app = app();
        let text = screen_text(&app);
        assert!(text.contains("Tato Aisle"));
        assert!(text.contains("Golden Crunch Fries"));
        assert!(text.contains("© 2025 Tato Aisle"));
        assert!(!text.contains("Your Cart"));

        press(&mut app, KeyCode::Char('a'), now);
        press(&mut app, KeyCode::Char('o'), now);
        let text = screen_text(&app);
        assert!(text.contains("Your Cart"));
        assert!(text.contains("Total: $5.99"));

        press(&mut app, KeyCode::Enter, now);
        let text = screen_text(&app);
        assert!(text.contains("Order Confirmed!"));
    }
}
