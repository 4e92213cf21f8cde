//! The product catalog and its derived views.
//!
//! - [`Catalog`] — immutable product list, seeded once at startup
//! - [`filter`] — search + category filtering ([`CategoryFilter`])
//!
//! The catalog never changes after construction, so [`crate::state::AppState`]
//! holds it without a lock.

mod builtin;
pub mod filter;

use std::collections::HashSet;

pub use filter::{filter_products, CategoryFilter, ALL_CATEGORIES_LABEL};

use crate::models::{Product, ProductId};

/// Internal error type for catalog construction and lookups.
/// The IPC layer maps these to `AppError` at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("product {0} has a zero price")]
    ZeroPrice(ProductId),
    #[error("product {id} original price {original} is below its price {price}")]
    OriginalBelowPrice {
        id: ProductId,
        price: u32,
        original: u32,
    },
    #[error("product {id} rating {rating} is outside 0..=5")]
    RatingOutOfRange { id: ProductId, rating: f32 },
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
}

/// Immutable, ordered product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from `products`, rejecting records that break the
    /// catalog invariants. Source order is kept.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        validate(&products)?;
        Ok(Self { products })
    }

    /// The storefront's shipped product list.
    pub fn builtin() -> Self {
        Self {
            products: builtin::products(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products matching `search` and `category`, in catalog order.
    pub fn filter(&self, search: &str, category: CategoryFilter) -> Vec<&Product> {
        filter_products(&self.products, search, category)
    }

    /// Products flagged for the recommendations section. Ignores any active
    /// search or category.
    pub fn recommended(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_recommended).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(products.len());
    for p in products {
        if !seen.insert(p.id) {
            return Err(CatalogError::DuplicateId(p.id));
        }
        if p.price == 0 {
            return Err(CatalogError::ZeroPrice(p.id));
        }
        if let Some(original) = p.original_price {
            if original < p.price {
                return Err(CatalogError::OriginalBelowPrice {
                    id: p.id,
                    price: p.price,
                    original,
                });
            }
        }
        if !(0.0..=5.0).contains(&p.rating) {
            // NaN fails the range check too.
            return Err(CatalogError::RatingOutOfRange {
                id: p.id,
                rating: p.rating,
            });
        }
    }
    Ok(())
}
