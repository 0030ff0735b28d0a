pub mod browse;
pub mod cart;
pub mod catalog;
