//! View-state IPC command handlers: search, category filter, cart panel.
//!
//! All handlers follow the `_inner` + `#[tauri::command]` wrapper pattern:
//! - `_inner` functions take `&RwLock<ViewState>` and contain the logic.
//!   They are synchronous and directly testable without Tauri.
//! - `#[tauri::command]` wrappers apply the change, then return a fresh
//!   [`StorefrontSnapshot`].

use std::sync::RwLock;

use serde::Serialize;

use crate::catalog::CategoryFilter;
use crate::error::AppError;
use crate::state::{AppState, ViewState};

use super::storefront::{get_storefront_inner, StorefrontSnapshot};
use super::{read_lock, write_lock};

/// One category filter button.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub label: &'static str,
    pub selected: bool,
}

// ── set_search_query ──────────────────────────────────────────────────────────

/// Testable inner logic for [`set_search_query`].
pub(crate) fn set_search_query_inner(
    query: String,
    view_lock: &RwLock<ViewState>,
) -> Result<(), AppError> {
    let mut view = write_lock(view_lock, "view")?;
    view.search_query = query;
    Ok(())
}

// ── select_category ───────────────────────────────────────────────────────────

/// Testable inner logic for [`select_category`].
///
/// Returns [`AppError::UnknownCategory`] (and leaves the selection as it was)
/// when `label` is neither the sentinel nor a known category.
pub(crate) fn select_category_inner(
    label: &str,
    view_lock: &RwLock<ViewState>,
) -> Result<CategoryFilter, AppError> {
    let filter = CategoryFilter::parse(label)?;
    let mut view = write_lock(view_lock, "view")?;
    view.selected_category = filter;
    tracing::debug!(category = filter.label(), "category selected");
    Ok(filter)
}

// ── list_categories ───────────────────────────────────────────────────────────

/// Testable inner logic for [`list_categories`].
pub(crate) fn list_categories_inner(
    view_lock: &RwLock<ViewState>,
) -> Result<Vec<CategoryOption>, AppError> {
    let selected = read_lock(view_lock, "view")?.selected_category;
    Ok(CategoryFilter::options()
        .into_iter()
        .map(|option| CategoryOption {
            label: option.label(),
            selected: option == selected,
        })
        .collect())
}

// ── cart panel ────────────────────────────────────────────────────────────────

/// Testable inner logic for [`toggle_cart_panel`]. Returns the new visibility.
pub(crate) fn toggle_cart_panel_inner(view_lock: &RwLock<ViewState>) -> Result<bool, AppError> {
    let mut view = write_lock(view_lock, "view")?;
    view.cart_open = !view.cart_open;
    Ok(view.cart_open)
}

/// Testable inner logic for [`set_cart_panel_open`].
pub(crate) fn set_cart_panel_open_inner(
    open: bool,
    view_lock: &RwLock<ViewState>,
) -> Result<(), AppError> {
    let mut view = write_lock(view_lock, "view")?;
    view.cart_open = open;
    Ok(())
}

// ── Tauri command wrappers ────────────────────────────────────────────────────

/// Replace the search text (one call per keystroke).
#[tauri::command]
pub async fn set_search_query(
    query: String,
    state: tauri::State<'_, AppState>,
) -> Result<StorefrontSnapshot, AppError> {
    set_search_query_inner(query, &state.view)?;
    get_storefront_inner(&state)
}

/// Select a category filter by its button label.
#[tauri::command]
pub async fn select_category(
    category: String,
    state: tauri::State<'_, AppState>,
) -> Result<StorefrontSnapshot, AppError> {
    select_category_inner(&category, &state.view)?;
    get_storefront_inner(&state)
}

/// Return the category filter buttons with the current selection marked.
#[tauri::command]
pub async fn list_categories(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<CategoryOption>, AppError> {
    list_categories_inner(&state.view)
}

/// Open the cart panel if closed, close it if open.
#[tauri::command]
pub async fn toggle_cart_panel(
    state: tauri::State<'_, AppState>,
) -> Result<StorefrontSnapshot, AppError> {
    toggle_cart_panel_inner(&state.view)?;
    get_storefront_inner(&state)
}

/// Explicitly open or close the cart panel (backdrop click, close button).
#[tauri::command]
pub async fn set_cart_panel_open(
    open: bool,
    state: tauri::State<'_, AppState>,
) -> Result<StorefrontSnapshot, AppError> {
    set_cart_panel_open_inner(open, &state.view)?;
    get_storefront_inner(&state)
}
