//! The product list the storefront ships with.

use crate::models::{Category, Product, ProductId};

const IMG_PHONE: &str = "/img/f988827b-1226-45ef-bc49-5cf1d568f162.jpg";
const IMG_AUDIO: &str = "/img/d71be1eb-22e1-4754-8d58-3398033a45f9.jpg";
const IMG_MAC: &str = "/img/abd5fa87-a0d4-4602-a324-1fe81ed79398.jpg";

pub(super) fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId(1),
            name: "iPhone 15 Pro Max".to_string(),
            price: 139990,
            original_price: Some(149990),
            image: IMG_PHONE.to_string(),
            category: Category::Smartphones,
            rating: 4.9,
            reviews: 1247,
            is_new: true,
            is_recommended: true,
        },
        Product {
            id: ProductId(2),
            name: "AirPods Pro 2".to_string(),
            price: 29990,
            original_price: None,
            image: IMG_AUDIO.to_string(),
            category: Category::Headphones,
            rating: 4.8,
            reviews: 856,
            is_new: false,
            is_recommended: true,
        },
        Product {
            id: ProductId(3),
            name: "MacBook Pro 16\"".to_string(),
            price: 289990,
            original_price: None,
            image: IMG_MAC.to_string(),
            category: Category::Laptops,
            rating: 4.9,
            reviews: 432,
            is_new: true,
            is_recommended: false,
        },
        Product {
            id: ProductId(4),
            name: "iPad Air 5".to_string(),
            price: 79990,
            original_price: Some(89990),
            image: IMG_PHONE.to_string(),
            category: Category::Tablets,
            rating: 4.7,
            reviews: 624,
            is_new: false,
            is_recommended: true,
        },
        Product {
            id: ProductId(5),
            name: "Apple Watch Ultra".to_string(),
            price: 99990,
            original_price: None,
            image: IMG_AUDIO.to_string(),
            category: Category::Watches,
            rating: 4.8,
            reviews: 312,
            is_new: false,
            is_recommended: false,
        },
        Product {
            id: ProductId(6),
            name: "iMac 24\" M3".to_string(),
            price: 189990,
            original_price: None,
            image: IMG_MAC.to_string(),
            category: Category::Computers,
            rating: 4.9,
            reviews: 187,
            is_new: true,
            is_recommended: false,
        },
    ]
}
