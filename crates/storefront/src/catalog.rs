//! Static product catalog.
//!
//! The catalog is a read-only lookup table seeded at startup and immutable
//! for the lifetime of the process. Stock counts are informational only;
//! nothing in the cart or checkout path decrements them.

use serde::Deserialize;

use neon_merch_core::{CurrencyCode, Product, ProductId};

/// Optional filters for catalog listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductFilter {
    /// Exact category match, case-insensitive (e.g. `mug`, `hoodie`).
    pub category: Option<String>,
    /// Keep only products priced at or below this amount.
    pub max_price: Option<i64>,
    /// Exact color match, case-insensitive.
    pub color: Option<String>,
    /// Case-insensitive substring match against name and description.
    pub search: Option<String>,
}

/// The read-only product catalog.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the catalog from the built-in seed products.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// List products matching the given filters, in catalog order.
    #[must_use]
    pub fn list(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|c| p.category.eq_ignore_ascii_case(c))
            })
            .filter(|p| filter.max_price.is_none_or(|max| p.price <= max))
            .filter(|p| {
                filter.color.as_ref().is_none_or(|c| {
                    p.color
                        .as_ref()
                        .is_some_and(|pc| pc.eq_ignore_ascii_case(c))
                })
            })
            .filter(|p| {
                filter.search.as_ref().is_none_or(|s| {
                    let needle = s.to_lowercase();
                    p.name.to_lowercase().contains(&needle)
                        || p.description.to_lowercase().contains(&needle)
                })
            })
            .collect()
    }
}

/// One seed product, kept terse so the table below stays readable.
#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    category: &str,
    color: &str,
    sizes: Option<&[&str]>,
    stock: u32,
    image: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        currency: CurrencyCode::INR,
        category: category.to_string(),
        color: Some(color.to_string()),
        sizes: sizes.map(|s| s.iter().map(ToString::to_string).collect()),
        stock,
        image: image.to_string(),
    }
}

fn seed_products() -> Vec<Product> {
    const APPAREL: &[&str] = &["S", "M", "L", "XL"];
    const OUTERWEAR: &[&str] = &["M", "L", "XL"];

    vec![
        product(
            "mug-001",
            "Cyberpunk Coffee Mug",
            "Neon-lit ceramic mug with LED base",
            899,
            "mug",
            "black",
            None,
            15,
            "\u{2615}",
        ),
        product(
            "mug-002",
            "Hacker's Energy Mug",
            "Extra large mug for long coding sessions",
            1299,
            "mug",
            "white",
            None,
            8,
            "\u{2615}",
        ),
        product(
            "tshirt-001",
            "Neural Network T-Shirt",
            "100% cotton with circuit board design",
            799,
            "tshirt",
            "black",
            Some(APPAREL),
            25,
            "\u{1f455}",
        ),
        product(
            "tshirt-002",
            "AI Developer Tee",
            "Soft fabric with 'Powered by AI' print",
            699,
            "tshirt",
            "navy",
            Some(APPAREL),
            30,
            "\u{1f455}",
        ),
        product(
            "hoodie-001",
            "Cyberpunk Hoodie",
            "Premium hoodie with neon accents",
            1999,
            "hoodie",
            "black",
            Some(OUTERWEAR),
            12,
            "\u{1f9e5}",
        ),
        product(
            "hoodie-002",
            "Code Warrior Hoodie",
            "Warm and comfortable for late-night coding",
            2299,
            "hoodie",
            "gray",
            Some(OUTERWEAR),
            10,
            "\u{1f9e5}",
        ),
        product(
            "cap-001",
            "Tech Geek Cap",
            "Adjustable cap with embroidered logo",
            499,
            "cap",
            "black",
            None,
            20,
            "\u{1f9e2}",
        ),
        product(
            "bag-001",
            "Developer Backpack",
            "Laptop compartment with USB charging port",
            2499,
            "bag",
            "black",
            None,
            8,
            "\u{1f392}",
        ),
        product(
            "mouse-001",
            "RGB Gaming Mouse",
            "Ergonomic design with customizable RGB",
            1499,
            "accessory",
            "black",
            None,
            15,
            "\u{1f5b1}\u{fe0f}",
        ),
        product(
            "keyboard-001",
            "Mechanical Keyboard",
            "Cherry MX switches with RGB backlight",
            3999,
            "accessory",
            "black",
            None,
            6,
            "\u{2328}\u{fe0f}",
        ),
    ]
}
