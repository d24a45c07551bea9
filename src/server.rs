// Pharmacy REST API.
//
// A small read-only HTTP surface over the product catalog, served alongside
// the TUI so external tooling can query stock:
//
//   GET /api/pharmacy/products                      -> full catalog
//   GET /api/pharmacy/products/{product_id}/batches -> batches for one product

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::data::products;

/// Build the API router. Split out from `serve` so tests can drive it
/// without binding a socket.
pub fn router() -> Router {
    Router::new()
        .route("/api/pharmacy/products", get(list_products))
        .route(
            "/api/pharmacy/products/:product_id/batches",
            get(list_batches),
        )
}

async fn list_products() -> Json<Value> {
    Json(json!(products::all()))
}

async fn list_batches(Path(product_id): Path<String>) -> (StatusCode, Json<Value>) {
    match products::product_by_id(&product_id) {
        Some(product) => (StatusCode::OK, Json(json!(product.batches))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Product not found" })),
        ),
    }
}

/// Bind and serve the pharmacy API on the configured port.
///
/// A bind failure (port already taken) is logged and swallowed: the portal
/// is still fully usable without the API.
pub async fn serve(port: u16) {
    let addr = format!("127.0.0.1:{port}");
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("pharmacy API failed to bind {}: {}", addr, e);
            return;
        }
    };
    info!("pharmacy API listening on {}", addr);
    if let Err(e) = axum::serve(listener, router()).await {
        error!("pharmacy API stopped: {}", e);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn products_endpoint_returns_catalog() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/pharmacy/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), products::all().len());
        // camelCase serialization on the wire.
        assert!(list[0].get("priceCents").is_some());
    }

    #[tokio::test]
    async fn batches_endpoint_returns_product_batches() {
        let product = &products::all()[0];
        let response = router()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/pharmacy/products/{}/batches", product.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), product.batches.len());
    }

    #[tokio::test]
    async fn unknown_product_is_404_with_error_body() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/pharmacy/products/no-such-id/batches")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Product not found");
    }
}
