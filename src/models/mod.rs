pub mod cart;
pub mod product;

pub use cart::{Cart, CartLineItem};
pub use product::{Category, Product, ProductId};
