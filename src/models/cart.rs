//! Shopping cart data model.
//!
//! A [`Cart`] holds at most one [`CartLineItem`] per product. Adding a product
//! that is already present bumps its quantity; removing a product drops the
//! whole line. Quantities therefore never reach zero.

use serde::Serialize;

use super::product::{Product, ProductId};

/// One aggregated cart entry for a single product.
///
/// Name, price and image are copied from the catalog when the product is
/// first added and are never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price in whole rubles at the time of the first add.
    pub price: u32,
    /// Always at least 1.
    pub quantity: u32,
    pub image: String,
}

impl CartLineItem {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
            image: product.image.clone(),
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

/// Ordered collection of line items, in first-added order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for the product if there is one,
    /// otherwise appends a new line with quantity 1. Returns the quantity now
    /// held for the product.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }
        self.items.push(CartLineItem::from_product(product));
        1
    }

    /// Remove the line for `id`. Returns `false` (and changes nothing) when
    /// the product is not in the cart.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Sum of unit price × quantity over all lines; 0 when empty.
    pub fn total(&self) -> u64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of quantities over all lines; 0 when empty.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
