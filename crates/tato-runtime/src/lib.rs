pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use config::{CheckoutConfig, Config, DisplayConfig, StorageConfig};
pub use error::{Error, Result};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{CheckoutOutcome, Storefront};
