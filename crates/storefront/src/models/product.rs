//! Catalog product type.

use rust_decimal::Decimal;
use serde::Serialize;

use finvia_core::{ProductCategory, ProductId};

/// A product in the storefront catalog.
///
/// Serialized in camelCase with prices as JSON numbers in USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Pre-sale price, present only for discounted products.
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Decimal>,
    pub image: String,
    pub category: ProductCategory,
    pub is_sale: bool,
    pub is_top_seller: bool,
}
