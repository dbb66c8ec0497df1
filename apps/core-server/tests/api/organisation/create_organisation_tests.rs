use rbac_core::model::role::Role;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_create_organisation_success() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .organisations
        .create(Some("Acme"))
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert_eq!(resp["id"], 1);
    assert_eq!(resp["name"], "Acme");

    let stored = context.db.organisations.get(&1.into()).await.unwrap();
    assert_eq!(stored.name, "Acme");
}

#[tokio::test]
async fn test_create_organisation_from_form_body() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .organisations
        .create_form("Globex")
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert_eq!(resp["name"], "Globex");
}

#[tokio::test]
async fn test_create_organisation_missing_name() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api(&[Role::Admin]).organisations.create(None).await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0004");
    assert!(resp["message"].as_str().unwrap().contains("name"));
    assert_eq!(context.db.organisations.count().await, 0);
}

#[tokio::test]
async fn test_create_organisation_without_body() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .organisations
        .create_without_content_type("")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0004");
    assert!(resp["message"].as_str().unwrap().contains("name"));
    assert_eq!(context.db.organisations.count().await, 0);
}

#[tokio::test]
async fn test_create_organisation_name_in_query_only() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .organisations
        .create_with_query("Acme")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0004");
    assert!(resp["message"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_create_organisation_json_without_content_type() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .organisations
        .create_without_content_type(r#"{"name": "Acme"}"#)
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    assert_eq!(resp.json_value().await["name"], "Acme");
}

#[tokio::test]
async fn test_create_organisation_non_string_name() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .organisations
        .create_raw(r#"{"name": 5}"#)
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0005");
    assert!(resp["message"].as_str().unwrap().contains("name"));
    assert_eq!(context.db.organisations.count().await, 0);
}

#[tokio::test]
async fn test_create_organisation_blank_name() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .organisations
        .create(Some("   "))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0006");
    assert_eq!(context.db.organisations.count().await, 0);
}

#[tokio::test]
async fn test_create_organisation_name_too_long() {
    // GIVEN
    let context = TestContext::new().await;
    let name = "a".repeat(101);

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .organisations
        .create(Some(&name))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0007");
}

#[tokio::test]
async fn test_create_organisation_malformed_body() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .organisations
        .create_raw("{\"name\": ")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0084");
}

#[tokio::test]
async fn test_create_organisation_ids_not_reused() {
    // GIVEN
    let context = TestContext::new().await;
    let api = context.api(&[Role::Admin]);
    api.organisations.create(Some("First")).await;
    assert_eq!(api.organisations.delete(&1).await.status(), 200);

    // WHEN
    let resp = api.organisations.create(Some("Second")).await;

    // THEN
    assert_eq!(resp.status(), 201);
    assert_eq!(resp.json_value().await["id"], 2);
}
