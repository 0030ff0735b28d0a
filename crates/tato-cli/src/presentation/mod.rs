//! Presentation layer.
//!
//! Presenters turn storefront state into view models (plain data); views
//! draw view models either as ratatui widgets or as console text; renderers
//! own the output loop.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use view_models::*;
