use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health_without_token() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api_with_token(None).other.health().await;

    // THEN
    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_build_info() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api_with_token(None).other.build_info().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["name"], "rbac-server");
    assert!(resp["version"].is_string());
}

#[tokio::test]
async fn test_metrics_endpoint() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api_with_token(None).other.metrics().await;

    // THEN
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_openapi_documents_routes() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api_with_token(None).other.openapi().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    for path in [
        "/organisation",
        "/organisation/{id}",
        "/employee",
        "/employee/{id}",
    ] {
        assert!(resp["paths"][path].is_object(), "{path}");
    }
    assert!(resp["components"]["securitySchemes"]["bearer"].is_object());
}
