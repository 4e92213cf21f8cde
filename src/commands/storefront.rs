//! Storefront snapshot and static page text.
//!
//! [`StorefrontSnapshot`] is everything the page renders, computed from the
//! current state by [`StorefrontSnapshot::project`]. Projection is a pure
//! function: it reads state and allocates the view, nothing else.

use serde::Serialize;

use crate::catalog::{Catalog, CategoryFilter};
use crate::config::{ContactsConfig, FeatureBlurb, StoreConfig};
use crate::error::AppError;
use crate::formatter::PriceFormatter;
use crate::models::{Cart, CartLineItem, Category, Product, ProductId};
use crate::state::{AppState, ViewState};

use super::read_lock;

// ── View types ────────────────────────────────────────────────────────────────

/// A product as shown on a catalog or recommendation card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: u32,
    pub formatted_price: String,
    pub original_price: Option<u32>,
    pub formatted_original_price: Option<String>,
    pub image: String,
    pub category: Category,
    pub rating: f32,
    pub reviews: u32,
    /// Filled stars, `floor(rating)`.
    pub full_stars: u8,
    pub is_new: bool,
    pub is_recommended: bool,
}

impl ProductCard {
    pub fn new(product: &Product, fmt: &PriceFormatter) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            formatted_price: fmt.format(u64::from(product.price)),
            original_price: product.original_price,
            formatted_original_price: product
                .original_price
                .map(|p| fmt.format(u64::from(p))),
            image: product.image.clone(),
            category: product.category,
            rating: product.rating,
            reviews: product.reviews,
            full_stars: product.full_stars(),
            is_new: product.is_new,
            is_recommended: product.is_recommended,
        }
    }
}

/// One row of the cart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub price: u32,
    pub quantity: u32,
    pub image: String,
    pub line_total: u64,
    pub formatted_line_total: String,
}

impl CartLineView {
    fn new(item: &CartLineItem, fmt: &PriceFormatter) -> Self {
        let line_total = item.line_total();
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            image: item.image.clone(),
            line_total,
            formatted_line_total: fmt.format(line_total),
        }
    }
}

/// The cart panel contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub item_count: u64,
    pub total: u64,
    pub formatted_total: String,
    /// Drives the "cart is empty" affordance.
    pub is_empty: bool,
}

impl CartView {
    pub fn new(cart: &Cart, fmt: &PriceFormatter) -> Self {
        let total = cart.total();
        Self {
            items: cart
                .items()
                .iter()
                .map(|i| CartLineView::new(i, fmt))
                .collect(),
            item_count: cart.item_count(),
            total,
            formatted_total: fmt.format(total),
            is_empty: cart.is_empty(),
        }
    }
}

/// Serializable projection of the whole storefront sent to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSnapshot {
    pub search_query: String,
    pub selected_category: CategoryFilter,
    pub cart_open: bool,
    /// Catalog filtered by the current search and category, in catalog order.
    pub catalog: Vec<ProductCard>,
    /// Recommended products, independent of search and category.
    pub recommended: Vec<ProductCard>,
    pub cart: CartView,
    /// Total quantity for the header badge; the badge is hidden at 0.
    pub badge_count: u64,
}

impl StorefrontSnapshot {
    pub fn project(
        catalog: &Catalog,
        cart: &Cart,
        view: &ViewState,
        fmt: &PriceFormatter,
    ) -> Self {
        let cards = |products: Vec<&Product>| -> Vec<ProductCard> {
            products
                .into_iter()
                .map(|p| ProductCard::new(p, fmt))
                .collect()
        };
        Self {
            search_query: view.search_query.clone(),
            selected_category: view.selected_category,
            cart_open: view.cart_open,
            catalog: cards(catalog.filter(&view.search_query, view.selected_category)),
            recommended: cards(catalog.recommended()),
            cart: CartView::new(cart, fmt),
            badge_count: cart.item_count(),
        }
    }
}

/// Static page text: header, about section and footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub features: Vec<FeatureBlurb>,
    pub delivery: Vec<String>,
    pub payment: Vec<String>,
    pub contacts: ContactsConfig,
    pub copyright: String,
}

impl From<&StoreConfig> for StoreInfo {
    fn from(cfg: &StoreConfig) -> Self {
        Self {
            name: cfg.store.name.clone(),
            tagline: cfg.store.tagline.clone(),
            about: cfg.store.about.clone(),
            features: cfg.features.clone(),
            delivery: cfg.delivery.clone(),
            payment: cfg.payment.clone(),
            contacts: cfg.contacts.clone(),
            copyright: cfg.store.copyright.clone(),
        }
    }
}

// ── get_storefront ────────────────────────────────────────────────────────────

/// Testable inner logic for [`get_storefront`].
///
/// Takes read locks on the view, then the cart, and projects them. Mutating
/// commands only ever hold one lock, so this order cannot deadlock.
pub(crate) fn get_storefront_inner(state: &AppState) -> Result<StorefrontSnapshot, AppError> {
    let view = read_lock(&state.view, "view")?;
    let cart = read_lock(&state.cart, "cart")?;
    Ok(StorefrontSnapshot::project(
        &state.catalog,
        &cart,
        &view,
        &state.formatter,
    ))
}

// ── Tauri command wrappers ────────────────────────────────────────────────────

/// Return the full storefront snapshot for the initial render.
#[tauri::command]
pub async fn get_storefront(
    state: tauri::State<'_, AppState>,
) -> Result<StorefrontSnapshot, AppError> {
    get_storefront_inner(&state)
}

/// Return the static header, about and footer text.
#[tauri::command]
pub async fn get_store_info(state: tauri::State<'_, AppState>) -> Result<StoreInfo, AppError> {
    Ok(StoreInfo::from(&state.config))
}
