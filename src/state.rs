//! Application state managed by Tauri.
//!
//! [`AppState`] is registered with `tauri::Builder::manage` and accessed from
//! command handlers via `tauri::State<AppState>`.

use std::sync::RwLock;

use crate::catalog::{Catalog, CategoryFilter};
use crate::config::StoreConfig;
use crate::formatter::PriceFormatter;
use crate::models::Cart;

/// UI-only flags that select which derived views are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Case-insensitive substring matched against product names.
    pub search_query: String,
    pub selected_category: CategoryFilter,
    /// Whether the slide-over cart panel is shown.
    pub cart_open: bool,
}

/// Root application state managed by Tauri.
///
/// The catalog and config never change after startup and are held directly.
/// The cart and view state are each wrapped in [`RwLock`] so snapshot reads
/// proceed concurrently while every mutation is serialized.
pub struct AppState {
    pub catalog: Catalog,
    pub config: StoreConfig,
    /// Built from `config.pricing` once at startup.
    pub formatter: PriceFormatter,
    pub cart: RwLock<Cart>,
    pub view: RwLock<ViewState>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: StoreConfig) -> Self {
        let formatter = config.pricing.formatter();
        Self {
            catalog,
            config,
            formatter,
            cart: RwLock::new(Cart::new()),
            view: RwLock::new(ViewState::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin(), StoreConfig::builtin())
    }
}
