//! Product data model for the storefront catalog.
//!
//! [`Product`] is the immutable catalog record shown on product cards. Fields
//! are serialized with camelCase keys so the webview frontend receives the
//! same shape it renders.

use serde::{Deserialize, Serialize};

/// Unique catalog identifier of a product.
///
/// Serialized transparently as a plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of product categories.
///
/// Serialized as the Russian display label (e.g. `"Наушники"`), which is also
/// the value the frontend sends back when a category button is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Смартфоны")]
    Smartphones,
    #[serde(rename = "Наушники")]
    Headphones,
    #[serde(rename = "Ноутбуки")]
    Laptops,
    #[serde(rename = "Планшеты")]
    Tablets,
    #[serde(rename = "Часы")]
    Watches,
    #[serde(rename = "Компьютеры")]
    Computers,
}

impl Category {
    /// Every category, in filter-button display order.
    pub const ALL: [Category; 6] = [
        Category::Smartphones,
        Category::Headphones,
        Category::Laptops,
        Category::Tablets,
        Category::Watches,
        Category::Computers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Smartphones => "Смартфоны",
            Category::Headphones => "Наушники",
            Category::Laptops => "Ноутбуки",
            Category::Tablets => "Планшеты",
            Category::Watches => "Часы",
            Category::Computers => "Компьютеры",
        }
    }

    /// Parses an exact display label. Matching is case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Current price in whole rubles.
    pub price: u32,
    /// Pre-discount price in whole rubles, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    /// Opaque image reference (a path served by the frontend).
    pub image: String,
    pub category: Category,
    /// Average review score in `[0, 5]`.
    pub rating: f32,
    pub reviews: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_recommended: bool,
}

impl Product {
    /// Number of filled stars on the product card (`floor(rating)`, 0..=5).
    pub fn full_stars(&self) -> u8 {
        if !self.rating.is_finite() {
            return 0;
        }
        self.rating.floor().clamp(0.0, 5.0) as u8
    }

    /// Amount saved against the original price, if the product is discounted.
    pub fn discount(&self) -> Option<u32> {
        self.original_price
            .map(|original| original.saturating_sub(self.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product() -> Product {
        Product {
            id: ProductId(4),
            name: "iPad Air 5".to_string(),
            price: 79990,
            original_price: Some(89990),
            image: "/img/ipad.jpg".to_string(),
            category: Category::Tablets,
            rating: 4.7,
            reviews: 624,
            is_new: false,
            is_recommended: true,
        }
    }

    #[test]
    fn product_fields_are_camel_case() {
        let value = serde_json::to_value(make_product()).expect("to_value");
        assert_eq!(value["originalPrice"], 89990);
        assert_eq!(value["isRecommended"], true);
        assert_eq!(value["isNew"], false);
        assert!(value.get("original_price").is_none());
    }

    #[test]
    fn product_id_serializes_as_plain_integer() {
        let value = serde_json::to_value(make_product()).expect("to_value");
        assert_eq!(value["id"], 4);
    }

    #[test]
    fn category_serializes_as_label() {
        let value = serde_json::to_value(make_product()).expect("to_value");
        assert_eq!(value["category"], "Планшеты");
    }

    #[test]
    fn original_price_absent_when_none() {
        let mut product = make_product();
        product.original_price = None;
        let value = serde_json::to_value(&product).expect("to_value");
        assert!(value.get("originalPrice").is_none());
    }

    #[test]
    fn flags_default_to_false_when_missing() {
        let json = r#"{
            "id": 2, "name": "AirPods Pro 2", "price": 29990,
            "image": "/img/a.jpg", "category": "Наушники",
            "rating": 4.8, "reviews": 856
        }"#;
        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert!(!product.is_new);
        assert!(!product.is_recommended);
        assert_eq!(product.category, Category::Headphones);
    }

    #[test]
    fn category_from_label_matches_every_label() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn category_from_label_rejects_unknown_and_case_variants() {
        assert_eq!(Category::from_label("Телевизоры"), None);
        assert_eq!(Category::from_label("наушники"), None);
        assert_eq!(Category::from_label(""), None);
    }

    #[test]
    fn full_stars_floors_rating() {
        let mut product = make_product();
        assert_eq!(product.full_stars(), 4);
        product.rating = 5.0;
        assert_eq!(product.full_stars(), 5);
        product.rating = 0.3;
        assert_eq!(product.full_stars(), 0);
        product.rating = f32::NAN;
        assert_eq!(product.full_stars(), 0);
    }

    #[test]
    fn discount_is_difference_to_original_price() {
        let mut product = make_product();
        assert_eq!(product.discount(), Some(10000));
        product.original_price = None;
        assert_eq!(product.discount(), None);
    }
}
