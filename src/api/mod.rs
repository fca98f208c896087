mod handlers;

use std::sync::{Arc, Mutex};

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::cart::CartStore;
use crate::catalog::Catalog;

/// State shared by every view: the one cart store and the product catalog.
///
/// The mutex serializes intents, so each request applies exactly one
/// transition against the latest committed state.
#[derive(Clone)]
pub struct AppState {
    pub cart: Arc<Mutex<CartStore>>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            cart: Arc::new(Mutex::new(CartStore::new())),
            catalog: Arc::new(catalog),
        }
    }
}

/// Prefix every view is nested under.
pub const API_PREFIX: &str = "/api/v1";
/// Product listing view, relative to [`API_PREFIX`].
pub const LISTING_PATH: &str = "/product/list";
/// Shopping cart view, relative to [`API_PREFIX`].
pub const CART_PATH: &str = "/product/cart";

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Landing
        .route("/", get(handlers::landing))
        // Product listing
        .route(LISTING_PATH, get(handlers::list_products))
        .route("/product/list/{name}/add", post(handlers::add_product))
        // Shopping cart
        .route(CART_PATH, get(handlers::get_cart))
        .route("/product/cart/items", post(handlers::add_item))
        .route("/product/cart/items/{name}/remove", post(handlers::remove_item))
        .route("/product/cart/items/{name}", delete(handlers::delete_item))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
