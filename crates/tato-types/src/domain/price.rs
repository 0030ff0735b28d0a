use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::{Error, Result};

/// Amount in whole cents.
///
/// Catalog prices are written as decimal text (`"5.99"`). Keeping cents as an
/// integer makes cart totals exact; `Display` always prints two fraction
/// digits, which is the only rounding the storefront promises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Parse decimal text such as `"7"`, `"7.2"` or `"7.25"`.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidPrice(text.to_string());
        let trimmed = text.trim();

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if trimmed.ends_with('.') {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let fraction_cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse::<u64>().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(Price)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Price::parse(s)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

// Stored as text so persisted carts keep the `"price": "5.99"` shape.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Price::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_fraction_digits() {
        assert_eq!(Price::parse("7.25").unwrap().cents(), 725);
        assert_eq!(Price::parse("15.99").unwrap().cents(), 1599);
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!(Price::parse("7").unwrap().cents(), 700);
        assert_eq!(Price::parse("7.2").unwrap().cents(), 720);
        assert_eq!(Price::parse(" 0.05 ").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["", ".5", "7.", "7.255", "-1.00", "abc", "1.2x", "1,50"] {
            assert!(Price::parse(text).is_err(), "{:?} should be rejected", text);
        }
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Price::from_cents(1450).to_string(), "14.50");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_sum_is_exact() {
        let prices = [Price::from_cents(725), Price::from_cents(725)];
        assert_eq!(prices.iter().sum::<Price>().to_string(), "14.50");
    }

    #[test]
    fn test_serde_uses_decimal_text() {
        let json = serde_json::to_string(&Price::from_cents(599)).unwrap();
        assert_eq!(json, "\"5.99\"");

        let price: Price = serde_json::from_str("\"12.99\"").unwrap();
        assert_eq!(price.cents(), 1299);

        assert!(serde_json::from_str::<Price>("\"twelve\"").is_err());
    }
}
