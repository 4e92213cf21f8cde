//! Cart IPC command handlers.
//!
//! All handlers follow the `_inner` + `#[tauri::command]` wrapper pattern:
//! - `_inner` functions take `&RwLock<Cart>` and contain the business logic.
//!   They are synchronous and directly testable without Tauri.
//! - `#[tauri::command]` wrappers extract managed state and delegate to
//!   `_inner`, then return a fresh [`StorefrontSnapshot`].
//!
//! Commands run on Tauri's async runtime and may execute concurrently. Each
//! mutation holds the cart write lock for its whole read-modify-write, which
//! keeps the one-line-per-product invariant intact.

use std::sync::RwLock;

use serde::Serialize;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::formatter::PriceFormatter;
use crate::models::{Cart, ProductId};
use crate::state::AppState;

use super::storefront::{get_storefront_inner, CartView, StorefrontSnapshot};
use super::{read_lock, write_lock};

/// Receipt returned by the checkout stub.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    /// Fresh reference for the order request.
    pub reference: Uuid,
    /// RFC 3339 UTC timestamp.
    pub placed_at: String,
    pub line_count: usize,
    pub item_count: u64,
    pub total: u64,
    pub formatted_total: String,
}

// ── add_to_cart ───────────────────────────────────────────────────────────────

/// Testable inner logic for [`add_to_cart`].
///
/// Looks `product_id` up in `catalog` and adds one unit to the cart. Returns
/// the quantity now held, or [`AppError::NotFound`] if the catalog has no
/// such product.
pub(crate) fn add_to_cart_inner(
    product_id: ProductId,
    catalog: &Catalog,
    cart_lock: &RwLock<Cart>,
) -> Result<u32, AppError> {
    let product = catalog
        .get(product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id} not found")))?;

    let mut cart = write_lock(cart_lock, "cart")?;
    let quantity = cart.add(product);
    tracing::debug!(product = %product_id, quantity, "added to cart");
    Ok(quantity)
}

// ── remove_from_cart ──────────────────────────────────────────────────────────

/// Testable inner logic for [`remove_from_cart`].
///
/// Removing a product that is not in the cart is a no-op; returns whether a
/// line was removed.
pub(crate) fn remove_from_cart_inner(
    product_id: ProductId,
    cart_lock: &RwLock<Cart>,
) -> Result<bool, AppError> {
    let mut cart = write_lock(cart_lock, "cart")?;
    let removed = cart.remove(product_id);
    tracing::debug!(product = %product_id, removed, "remove from cart");
    Ok(removed)
}

// ── get_cart ──────────────────────────────────────────────────────────────────

/// Testable inner logic for [`get_cart`].
pub(crate) fn get_cart_inner(
    cart_lock: &RwLock<Cart>,
    fmt: &PriceFormatter,
) -> Result<CartView, AppError> {
    let cart = read_lock(cart_lock, "cart")?;
    Ok(CartView::new(&cart, fmt))
}

// ── checkout ──────────────────────────────────────────────────────────────────

/// Testable inner logic for [`checkout`].
///
/// There is no order backend: this summarises the cart, logs the request and
/// leaves the cart untouched. Returns [`AppError::EmptyCart`] for an empty
/// cart.
pub(crate) fn checkout_inner(
    cart_lock: &RwLock<Cart>,
    fmt: &PriceFormatter,
) -> Result<CheckoutSummary, AppError> {
    let cart = read_lock(cart_lock, "cart")?;
    if cart.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let total = cart.total();
    let summary = CheckoutSummary {
        reference: Uuid::new_v4(),
        placed_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        line_count: cart.len(),
        item_count: cart.item_count(),
        total,
        formatted_total: fmt.format(total),
    };
    tracing::info!(
        reference = %summary.reference,
        lines = summary.line_count,
        items = summary.item_count,
        total = summary.total,
        "checkout requested"
    );
    Ok(summary)
}

// ── Tauri command wrappers ────────────────────────────────────────────────────

/// Add one unit of a catalog product to the cart.
#[tauri::command]
pub async fn add_to_cart(
    product_id: u32,
    state: tauri::State<'_, AppState>,
) -> Result<StorefrontSnapshot, AppError> {
    add_to_cart_inner(ProductId(product_id), &state.catalog, &state.cart)?;
    get_storefront_inner(&state)
}

/// Remove a product's line from the cart. Unknown ids are ignored.
#[tauri::command]
pub async fn remove_from_cart(
    product_id: u32,
    state: tauri::State<'_, AppState>,
) -> Result<StorefrontSnapshot, AppError> {
    remove_from_cart_inner(ProductId(product_id), &state.cart)?;
    get_storefront_inner(&state)
}

/// Return the cart panel contents.
#[tauri::command]
pub async fn get_cart(state: tauri::State<'_, AppState>) -> Result<CartView, AppError> {
    get_cart_inner(&state.cart, &state.formatter)
}

/// Checkout stub: returns a summary of the current cart.
#[tauri::command]
pub async fn checkout(state: tauri::State<'_, AppState>) -> Result<CheckoutSummary, AppError> {
    checkout_inner(&state.cart, &state.formatter)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Product};

    fn cart_snapshot(state: &AppState) -> Cart {
        state.cart.read().expect("read lock").clone()
    }

    #[test]
    fn add_known_product_creates_line() {
        let state = AppState::default();
        let quantity =
            add_to_cart_inner(ProductId(3), &state.catalog, &state.cart).expect("add");
        assert_eq!(quantity, 1);

        let cart = cart_snapshot(&state);
        let item = cart.get(ProductId(3)).expect("line present");
        assert_eq!(item.name, "MacBook Pro 16\"");
        assert_eq!(item.price, 289990);
    }

    #[test]
    fn add_unknown_product_returns_not_found_and_leaves_cart() {
        let state = AppState::default();
        let result = add_to_cart_inner(ProductId(99), &state.catalog, &state.cart);
        assert!(matches!(result, Err(AppError::NotFound(ref m)) if m.contains("99")));
        assert!(cart_snapshot(&state).is_empty());
    }

    #[test]
    fn storefront_example_two_lines_total() {
        let state = AppState::default();
        add_to_cart_inner(ProductId(1), &state.catalog, &state.cart).expect("add iPhone");
        add_to_cart_inner(ProductId(2), &state.catalog, &state.cart).expect("add AirPods");
        let quantity =
            add_to_cart_inner(ProductId(1), &state.catalog, &state.cart).expect("add iPhone");
        assert_eq!(quantity, 2);

        let view = get_cart_inner(&state.cart, &state.formatter).expect("get cart");
        let quantities: Vec<u32> = view.items.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![2, 1]);
        assert_eq!(view.total, 309970);
        assert_eq!(view.item_count, 3);
    }

    #[test]
    fn remove_present_product_returns_true() {
        let state = AppState::default();
        add_to_cart_inner(ProductId(5), &state.catalog, &state.cart).expect("add");
        assert!(remove_from_cart_inner(ProductId(5), &state.cart).expect("remove"));
        assert!(cart_snapshot(&state).is_empty());
    }

    #[test]
    fn remove_absent_product_leaves_cart_unchanged() {
        let state = AppState::default();
        add_to_cart_inner(ProductId(1), &state.catalog, &state.cart).expect("add");
        add_to_cart_inner(ProductId(1), &state.catalog, &state.cart).expect("add");
        let before = cart_snapshot(&state);

        let removed = remove_from_cart_inner(ProductId(6), &state.cart).expect("remove");
        assert!(!removed);
        assert_eq!(cart_snapshot(&state), before);
    }

    #[test]
    fn add_then_remove_round_trips() {
        let state = AppState::default();
        add_to_cart_inner(ProductId(4), &state.catalog, &state.cart).expect("add");
        let before = cart_snapshot(&state);

        add_to_cart_inner(ProductId(6), &state.catalog, &state.cart).expect("add");
        remove_from_cart_inner(ProductId(6), &state.cart).expect("remove");
        assert_eq!(cart_snapshot(&state), before);
    }

    #[test]
    fn cart_price_does_not_follow_catalog_changes() {
        let phone = |price: u32| Product {
            id: ProductId(1),
            name: "Phone".to_string(),
            price,
            original_price: None,
            image: String::new(),
            category: Category::Smartphones,
            rating: 4.0,
            reviews: 0,
            is_new: false,
            is_recommended: false,
        };
        let cart = RwLock::new(Cart::new());
        let before = Catalog::new(vec![phone(1000)]).expect("catalog");
        let after = Catalog::new(vec![phone(1500)]).expect("catalog");

        add_to_cart_inner(ProductId(1), &before, &cart).expect("add");
        add_to_cart_inner(ProductId(1), &after, &cart).expect("add");

        let view = get_cart_inner(&cart, &PriceFormatter::default()).expect("get cart");
        assert_eq!(view.items[0].price, 1000);
        assert_eq!(view.total, 2000);
    }

    #[test]
    fn concurrent_adds_never_duplicate_lines_or_lose_increments() {
        let state = AppState::default();
        const THREADS: u32 = 8;
        const ADDS: u32 = 250;

        std::thread::scope(|scope| {
            for t in 0..THREADS {
                let state = &state;
                scope.spawn(move || {
                    for i in 0..ADDS {
                        let id = ProductId(1 + (t + i) % 3);
                        add_to_cart_inner(id, &state.catalog, &state.cart).expect("add");
                    }
                });
            }
        });

        let cart = cart_snapshot(&state);
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.item_count(), u64::from(THREADS * ADDS));
        for id in 1..=3 {
            let lines = cart.items().iter().filter(|i| i.id == ProductId(id)).count();
            assert_eq!(lines, 1);
        }
    }

    #[test]
    fn checkout_empty_cart_is_rejected() {
        let state = AppState::default();
        let result = checkout_inner(&state.cart, &state.formatter);
        assert!(matches!(result, Err(AppError::EmptyCart)));
    }

    #[test]
    fn checkout_summarises_without_clearing_cart() {
        let state = AppState::default();
        add_to_cart_inner(ProductId(2), &state.catalog, &state.cart).expect("add");
        add_to_cart_inner(ProductId(2), &state.catalog, &state.cart).expect("add");
        let before = cart_snapshot(&state);

        let summary = checkout_inner(&state.cart, &state.formatter).expect("checkout");
        assert_eq!(summary.line_count, 1);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total, 59980);
        assert_eq!(summary.formatted_total, "59\u{a0}980 ₽");
        assert!(summary.placed_at.ends_with('Z'));
        assert_eq!(cart_snapshot(&state), before);
    }

    #[test]
    fn checkout_references_are_unique() {
        let state = AppState::default();
        add_to_cart_inner(ProductId(1), &state.catalog, &state.cart).expect("add");
        let a = checkout_inner(&state.cart, &state.formatter).expect("checkout");
        let b = checkout_inner(&state.cart, &state.formatter).expect("checkout");
        assert_ne!(a.reference, b.reference);
    }

    #[test]
    fn checkout_summary_serializes_camel_case() {
        let state = AppState::default();
        add_to_cart_inner(ProductId(1), &state.catalog, &state.cart).expect("add");
        let summary = checkout_inner(&state.cart, &state.formatter).expect("checkout");
        let value = serde_json::to_value(&summary).expect("serialize");
        assert!(value.get("placedAt").is_some());
        assert!(value.get("formattedTotal").is_some());
        assert!(value.get("lineCount").is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn parallel_blocking_tasks_share_one_cart() {
        let state = std::sync::Arc::new(AppState::default());
        let mut handles = Vec::new();
        for _ in 0..16 {
            let state = std::sync::Arc::clone(&state);
            handles.push(tokio::task::spawn_blocking(move || {
                add_to_cart_inner(ProductId(4), &state.catalog, &state.cart)
            }));
        }
        for handle in handles {
            handle.await.expect("task panicked").expect("add");
        }

        let view = get_cart_inner(&state.cart, &state.formatter).expect("get cart");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 16);
    }
}
