//! Search and category filtering over the catalog.

use serde::{Serialize, Serializer};

use super::CatalogError;
use crate::models::{Category, Product};

/// Label of the "no category restriction" filter button.
pub const ALL_CATEGORIES_LABEL: &str = "Все товары";

/// Category restriction applied to the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Sentinel: every category passes.
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter-button label.
    ///
    /// Accepts [`ALL_CATEGORIES_LABEL`] or `"all"` for the sentinel and the
    /// exact label of any [`Category`].
    pub fn parse(label: &str) -> Result<Self, CatalogError> {
        if label == ALL_CATEGORIES_LABEL || label == "all" {
            return Ok(CategoryFilter::All);
        }
        Category::from_label(label)
            .map(CategoryFilter::Only)
            .ok_or_else(|| CatalogError::UnknownCategory(label.to_string()))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// All filter buttons in display order: the sentinel, then each category.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Products whose name contains `search` (case-insensitively) and whose
/// category passes `category`, in source order.
pub fn filter_products<'a>(
    products: &'a [Product],
    search: &str,
    category: CategoryFilter,
) -> Vec<&'a Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| category.matches(p.category))
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect()
}
