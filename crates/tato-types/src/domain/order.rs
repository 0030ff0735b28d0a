use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Price, Product};

/// Order identifier derived from the checkout timestamp (milliseconds since epoch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Id for an order placed at `placed_at`, strictly greater than `previous`.
    pub fn next_after(previous: Option<OrderId>, placed_at: DateTime<Utc>) -> Self {
        let candidate = placed_at.timestamp_millis();
        match previous {
            Some(prev) if candidate <= prev.0 => Self(prev.0 + 1),
            _ => Self(candidate),
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a completed checkout. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<Product>,
    pub total: Price,
}
