//! Static product catalog.
//!
//! The catalog is built once at startup and shared immutably between
//! requests.

use rust_decimal_macros::dec;

use finvia_core::{ProductCategory, ProductId};

use crate::models::Product;

/// Named product filters exposed by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFilter {
    TopSellers,
    Sale,
}

impl ProductFilter {
    /// Whether `product` passes this filter.
    #[must_use]
    pub const fn matches(self, product: &Product) -> bool {
        match self {
            Self::TopSellers => product.is_top_seller,
            Self::Sale => product.is_sale,
        }
    }
}

impl std::str::FromStr for ProductFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-sellers" => Ok(Self::TopSellers),
            "sale" => Ok(Self::Sale),
            other => Err(format!("unknown product filter: {other}")),
        }
    }
}

/// An immutable list of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a list of products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The launch catalog.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            Product {
                id: ProductId::new("1"),
                name: "Classic White ".to_string(),
                description: "Essential cotton t-shirt in classic white".to_string(),
                price: dec!(19.99),
                original_price: None,
                image: "https://nobero.com/cdn/shop/files/white_855177b5-5621-4a4b-a0d1-9060b89a6a69.jpg?v=1711979035".to_string(),
                category: ProductCategory::MensClothing,
                is_sale: false,
                is_top_seller: true,
            },
            Product {
                id: ProductId::new("2"),
                name: "Floral Summer Dress".to_string(),
                description: "Light and breezy floral print dress".to_string(),
                price: dec!(49.99),
                original_price: Some(dec!(79.99)),
                image: "/placeholder.svg?height=400&width=400".to_string(),
                category: ProductCategory::WomensClothing,
                is_sale: true,
                is_top_seller: false,
            },
            Product {
                id: ProductId::new("3"),
                name: "Kids Dinosaur Hoodie".to_string(),
                description: "Fun dinosaur print hoodie for kids".to_string(),
                price: dec!(29.99),
                original_price: None,
                image: "/placeholder.svg?height=400&width=400".to_string(),
                category: ProductCategory::KidsWear,
                is_sale: false,
                is_top_seller: true,
            },
            Product {
                id: ProductId::new("4"),
                name: "Family Pack - Basic Tees".to_string(),
                description: "Set of 4 basic t-shirts for the whole family".to_string(),
                price: dec!(59.99),
                original_price: Some(dec!(89.99)),
                image: "/placeholder.svg?height=400&width=400".to_string(),
                category: ProductCategory::Combo,
                is_sale: true,
                is_top_seller: false,
            },
            Product {
                id: ProductId::new("5"),
                name: "Premium Zip Hoodie".to_string(),
                description: "Comfortable zip-up hoodie in premium cotton".to_string(),
                price: dec!(44.99),
                original_price: None,
                image: "/placeholder.svg?height=400&width=400".to_string(),
                category: ProductCategory::Hoodies,
                is_sale: false,
                is_top_seller: true,
            },
        ])
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Products matching an optional category and an optional named filter.
    #[must_use]
    pub fn search(
        &self,
        category: Option<ProductCategory>,
        filter: Option<ProductFilter>,
    ) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| filter.is_none_or(|f| f.matches(p)))
            .collect()
    }
}
