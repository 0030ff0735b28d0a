use std::fmt;

/// Result type for tato-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing domain values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Price text is not a non-negative decimal with at most two fraction digits
    InvalidPrice(String),

    /// Category name is not one of the catalog categories
    UnknownCategory(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPrice(text) => write!(f, "Invalid price: {:?}", text),
            Error::UnknownCategory(name) => write!(f, "Unknown category: {:?}", name),
        }
    }
}

impl std::error::Error for Error {}
