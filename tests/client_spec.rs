use storefront::api::{create_router, AppState};
use storefront::catalog::Catalog;
use storefront::client::{ClientError, StorefrontClient};
use storefront::models::*;

/// Serve a fresh store on an ephemeral port and point a client at it.
async fn setup() -> StorefrontClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    let app = create_router(AppState::new(Catalog::demo()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    StorefrontClient::new(format!("http://{}/api/v1", addr))
}

mod views {
    use super::*;

    #[tokio::test]
    async fn loads_every_view() {
        let client = setup().await;

        let landing = client.landing().await.expect("Failed to load landing");
        assert_eq!(landing.item_count, 0);

        let entries = client.list_products().await.expect("Failed to list products");
        assert_eq!(entries.len(), Catalog::demo().products().len());

        let cart = client.get_cart().await.expect("Failed to load cart");
        assert!(cart.items.is_empty());
    }
}

mod errors {
    use super::*;

    #[tokio::test]
    async fn unknown_product_maps_to_not_found() {
        let client = setup().await;

        let result = client.add_product("Spaceship").await;

        assert!(matches!(result, Err(ClientError::NotFound(msg)) if msg.contains("not found")));
    }

    #[tokio::test]
    async fn invalid_item_maps_to_bad_request() {
        let client = setup().await;

        let result = client.add_item(&CartItem::new("", 1, 5.0, "x")).await;

        assert!(matches!(result, Err(ClientError::BadRequest(msg)) if msg.contains("empty")));
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_http_error() {
        let client = StorefrontClient::new("http://127.0.0.1:1/api/v1");

        let result = client.get_cart().await;

        assert!(matches!(result, Err(ClientError::Http(_))));
    }
}

mod cart {
    use super::*;

    #[tokio::test]
    async fn add_product_then_remove_round_trips() {
        let client = setup().await;

        let view = client.add_product("Shoe").await.expect("Failed to add");
        assert_eq!(view.item_count, 1);

        let view = client.remove_item("Shoe").await.expect("Failed to remove");
        assert!(view.items.is_empty());
    }

    #[tokio::test]
    async fn names_with_slash_and_space_round_trip() {
        let client = setup().await;

        let view = client
            .add_item(&CartItem::new("A/B C", 1, 5.0, "x"))
            .await
            .expect("Failed to add");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "A/B C");

        let view = client.delete_item("A/B C").await.expect("Failed to delete");
        assert!(view.items.is_empty());
    }
}
