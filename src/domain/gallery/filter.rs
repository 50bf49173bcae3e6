// SPDX-License-Identifier: MPL-2.0
//! Category filtering for the gallery.
//!
//! Filters are pure values. [`CategoryFilter::matches`] is the single place
//! that decides whether a photo belongs to a filtered view.

use super::types::Category;
use std::fmt;
use std::str::FromStr;

/// Active gallery filter: a single category or the "all" wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Show every photo.
    #[default]
    All,
    /// Show only photos tagged with this category.
    Only(Category),
}

impl CategoryFilter {
    /// Every filter value, wildcard first, in the order the filter bar shows them.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Nature),
        CategoryFilter::Only(Category::Portrait),
        CategoryFilter::Only(Category::Street),
    ];

    /// Returns `true` if a photo of `category` is visible under this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Stable lowercase key, `"all"` for the wildcard.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.key(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CategoryFilter {
    type Err = super::types::UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<Category>().map(Self::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_every_category() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn single_category_matches_only_itself() {
        let filter = CategoryFilter::Only(Category::Street);
        assert!(filter.matches(Category::Street));
        assert!(!filter.matches(Category::Nature));
        assert!(!filter.matches(Category::Portrait));
    }

    #[test]
    fn parses_wildcard_and_categories() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "portrait".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Portrait))
        );
        assert!("macro".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn filter_bar_order_starts_with_wildcard() {
        let keys: Vec<_> = CategoryFilter::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, ["all", "nature", "portrait", "street"]);
    }
}
