//! Local key-value storage.
//!
//! The storefront keeps exactly one durable value (the cart), stored as a
//! string under a well-known key, the same way a browser page would use
//! local storage.

mod fs;
mod memory;

pub use fs::FileStore;
pub use memory::MemoryStore;

use crate::Result;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}
