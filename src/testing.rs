//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Product;

/// Create a product with the fields the ranker reads most often.
///
/// This is the canonical implementation used across all tests.
pub fn make_product(id: &str, name: &str, category: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        brand: None,
        category: category.to_string(),
        price: 100.0,
        original_price: None,
        rating: 4,
        reviews: 10,
        discount: None,
        is_new: false,
        image_url: None,
        created_at: None,
    }
}

/// Create a product with every text field the ranker matches against.
pub fn make_full_product(
    id: &str,
    name: &str,
    brand: Option<&str>,
    category: &str,
    description: &str,
) -> Product {
    Product {
        description: description.to_string(),
        brand: brand.map(str::to_string),
        ..make_product(id, name, category)
    }
}

/// The two-phone catalog used throughout the ranking tests.
pub fn phone_catalog() -> Vec<Product> {
    vec![
        make_full_product(
            "1",
            "iPhone 15 Pro",
            Some("Apple"),
            "smartphones",
            "flagship phone",
        ),
        make_full_product(
            "2",
            "Samsung Galaxy S24",
            Some("Samsung"),
            "smartphones",
            "android flagship",
        ),
    ]
}

/// A small mixed storefront catalog, in listing order.
pub fn storefront_catalog() -> Vec<Product> {
    vec![
        make_full_product(
            "1",
            "iPhone 15 Pro Max 256GB - Natural Titanium",
            Some("Apple"),
            "smartphones",
            "Titanium design with the A17 Pro chip",
        ),
        make_full_product(
            "2",
            "MacBook Pro 14-inch M3 Pro Chip - Space Black",
            Some("Apple"),
            "laptops",
            "Pro laptop for creative work",
        ),
        make_full_product(
            "3",
            "Sony WH-1000XM5 Wireless Noise Canceling Headphones",
            Some("Sony"),
            "headphones",
            "Industry leading noise cancellation",
        ),
        make_full_product(
            "4",
            "Samsung Galaxy S24 Ultra 512GB - Titanium Gray",
            Some("Samsung"),
            "smartphones",
            "Galaxy AI is here",
        ),
        make_full_product(
            "5",
            "Canon EOS R5 Mirrorless Camera Body",
            Some("Canon"),
            "cameras",
            "45MP full-frame sensor",
        ),
        make_full_product(
            "6",
            "Apple Watch Series 9 GPS + Cellular 45mm",
            Some("Apple"),
            "smartwatches",
            "Smarter, brighter, mightier",
        ),
        make_full_product(
            "7",
            "PlayStation 5 Console + Extra Controller",
            Some("Sony"),
            "gaming",
            "Play has no limits",
        ),
        make_full_product(
            "8",
            "Dell XPS 13 Plus Laptop - Intel i7 16GB RAM",
            Some("Dell"),
            "laptops",
            "Compact ultrabook",
        ),
    ]
}
