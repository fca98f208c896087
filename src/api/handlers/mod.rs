use std::sync::MutexGuard;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{AppState, API_PREFIX, CART_PATH, LISTING_PATH};
use crate::cart::{select_cart, select_item, select_item_count, CartStore};
use crate::models::*;

// ============================================================
// Helpers
// ============================================================

fn lock_cart(state: &AppState) -> MutexGuard<'_, CartStore> {
    state.cart.lock().expect("cart lock poisoned")
}

fn cart_view(store: &CartStore) -> CartView {
    CartView {
        items: select_cart(store.state()).to_vec(),
        item_count: select_item_count(store.state()),
    }
}

fn bad_request(e: CartError) -> (StatusCode, String) {
    tracing::warn!("Rejected cart item: {}", e);
    (StatusCode::BAD_REQUEST, e.to_string())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Landing
// ============================================================

pub async fn landing(State(state): State<AppState>) -> Json<LandingView> {
    let item_count = select_item_count(lock_cart(&state).state());
    Json(LandingView {
        title: "Storefront".to_string(),
        tagline: "Browse the catalog and fill your cart".to_string(),
        listing: format!("{}{}", API_PREFIX, LISTING_PATH),
        cart: format!("{}{}", API_PREFIX, CART_PATH),
        item_count,
    })
}

// ============================================================
// Product listing
// ============================================================

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<ListingEntry>> {
    let store = lock_cart(&state);
    let entries: Vec<ListingEntry> = state
        .catalog
        .products()
        .iter()
        .map(|product| ListingEntry {
            product: product.clone(),
            in_cart: select_item(store.state(), &product.name)
                .map(|item| item.quantity)
                .unwrap_or(0),
        })
        .collect();
    Json(entries)
}

pub async fn add_product(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CartView>, (StatusCode, String)> {
    let item = state
        .catalog
        .find(&name)
        .map(Product::to_cart_item)
        .ok_or((StatusCode::NOT_FOUND, "Product not found".to_string()))?;

    let mut store = lock_cart(&state);
    store.add_item(item);
    Ok(Json(cart_view(&store)))
}

// ============================================================
// Shopping cart
// ============================================================

pub async fn get_cart(State(state): State<AppState>) -> Json<CartView> {
    Json(cart_view(&lock_cart(&state)))
}

pub async fn add_item(
    State(state): State<AppState>,
    Json(item): Json<CartItem>,
) -> Result<Json<CartView>, (StatusCode, String)> {
    item.validate().map_err(bad_request)?;

    let mut store = lock_cart(&state);
    store.add_item(item);
    Ok(Json(cart_view(&store)))
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<CartView> {
    let mut store = lock_cart(&state);
    store.remove_item(name);
    Json(cart_view(&store))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<CartView> {
    let mut store = lock_cart(&state);
    store.delete_item(name);
    Json(cart_view(&store))
}
