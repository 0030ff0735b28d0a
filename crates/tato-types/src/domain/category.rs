use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Product category as printed on the shelf labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Fries,
    Fresh,
    Sweet,
    Seasoned,
    Breakfast,
    Premium,
    Healthy,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Fries,
        Category::Fresh,
        Category::Sweet,
        Category::Seasoned,
        Category::Breakfast,
        Category::Premium,
        Category::Healthy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fries => "Fries",
            Category::Fresh => "Fresh",
            Category::Sweet => "Sweet",
            Category::Seasoned => "Seasoned",
            Category::Breakfast => "Breakfast",
            Category::Premium => "Premium",
            Category::Healthy => "Healthy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Category selector value: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selector options in the order the storefront lists them.
    pub const OPTIONS: [CategoryFilter; 8] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Fresh),
        CategoryFilter::Only(Category::Fries),
        CategoryFilter::Only(Category::Premium),
        CategoryFilter::Only(Category::Seasoned),
        CategoryFilter::Only(Category::Breakfast),
        CategoryFilter::Only(Category::Sweet),
        CategoryFilter::Only(Category::Healthy),
    ];

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Next selector option, wrapping around.
    pub fn next(self) -> Self {
        let pos = self.position();
        Self::OPTIONS[(pos + 1) % Self::OPTIONS.len()]
    }

    /// Previous selector option, wrapping around.
    pub fn previous(self) -> Self {
        let pos = self.position();
        Self::OPTIONS[(pos + Self::OPTIONS.len() - 1) % Self::OPTIONS.len()]
    }

    fn position(self) -> usize {
        Self::OPTIONS
            .iter()
            .position(|option| *option == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}
