mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_alias::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _pool) = common::create_test_state().await;
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_degraded_when_pool_closed() {
    let (state, pool) = common::create_test_state().await;
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    pool.close().await;

    let response = server.get("/api/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
