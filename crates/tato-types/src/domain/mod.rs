pub mod category;
pub mod order;
pub mod price;
pub mod product;

pub use category::*;
pub use order::*;
pub use price::*;
pub use product::*;
