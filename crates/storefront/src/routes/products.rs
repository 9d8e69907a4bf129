//! Product catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use finvia_core::ProductCategory;

use crate::error::{AppError, Result};
use crate::models::Product;
use crate::services::catalog::ProductFilter;
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    /// Category slug, e.g. `hoodies`.
    pub category: Option<String>,
    /// Named filter: `top-sellers` or `sale`.
    pub filter: Option<String>,
}

/// A navigation category.
#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    pub slug: &'static str,
    pub name: &'static str,
}

/// List products.
///
/// GET /api/products?category=...&filter=...
///
/// An unknown category lists nothing.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for an unknown filter name.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>> {
    let filter = query
        .filter
        .as_deref()
        .map(str::parse::<ProductFilter>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let products = match query.category.as_deref() {
        None => state.catalog().search(None, filter),
        Some(slug) => slug
            .parse::<ProductCategory>()
            .map(|category| state.catalog().search(Some(category), filter))
            .unwrap_or_default(),
    };

    Ok(Json(products.into_iter().cloned().collect()))
}

/// Product detail.
///
/// GET /api/products/{id}
///
/// # Errors
///
/// Returns `AppError::NotFound` if no product has this ID.
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    state
        .catalog()
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product".to_string()))
}

/// Navigation categories.
///
/// GET /api/categories
pub async fn categories() -> Json<Vec<CategoryEntry>> {
    Json(
        ProductCategory::ALL
            .into_iter()
            .map(|category| CategoryEntry {
                slug: category.slug(),
                name: category.display_name(),
            })
            .collect(),
    )
}
