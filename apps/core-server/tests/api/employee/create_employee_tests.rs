use rbac_core::model::role::Role;
use serde_json::json;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_create_employee_from_form_body() {
    // GIVEN
    let (context, organisation_id) = TestContext::new_with_organisation().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .employees
        .create_form("Alice", &organisation_id.to_string())
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert_eq!(resp["name"], "Alice");
    assert_eq!(resp["organization_id"], i32::from(organisation_id));
}

#[tokio::test]
async fn test_create_employee_numeric_text_organisation() {
    // GIVEN
    let (context, organisation_id) = TestContext::new_with_organisation().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .employees
        .create(json!({ "name": "Alice", "organization_id": organisation_id.to_string() }))
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    assert_eq!(
        resp.json_value().await["organization_id"],
        i32::from(organisation_id)
    );
}

#[tokio::test]
async fn test_create_employee_unknown_organisation() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .employees
        .create(json!({ "name": "Bob", "organization_id": 99 }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0008");
    assert_eq!(context.db.employees.count().await, 0);
}

#[tokio::test]
async fn test_create_employee_missing_organisation() {
    // GIVEN
    let (context, _) = TestContext::new_with_organisation().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .employees
        .create(json!({ "name": "Bob" }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0004");
    assert!(
        resp["message"]
            .as_str()
            .unwrap()
            .contains("organization_id")
    );
    assert_eq!(context.db.employees.count().await, 0);
}

#[tokio::test]
async fn test_create_employee_invalid_organisation() {
    // GIVEN
    let (context, _) = TestContext::new_with_organisation().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .employees
        .create_form("Bob", "first")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0005");
    assert_eq!(context.db.employees.count().await, 0);
}

#[tokio::test]
async fn test_create_employee_missing_name() {
    // GIVEN
    let (context, organisation_id) = TestContext::new_with_organisation().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .employees
        .create(json!({ "organization_id": i32::from(organisation_id) }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0004");
}

#[tokio::test]
async fn test_create_employee_non_string_name() {
    // GIVEN
    let (context, organisation_id) = TestContext::new_with_organisation().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .employees
        .create(json!({ "name": 5, "organization_id": i32::from(organisation_id) }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0005");
    assert!(resp["message"].as_str().unwrap().contains("name"));
    assert_eq!(context.db.employees.count().await, 0);
}

#[tokio::test]
async fn test_create_employee_as_manager_forbidden() {
    // GIVEN
    let (context, organisation_id) = TestContext::new_with_organisation().await;

    // WHEN
    let resp = context
        .api(&[Role::Manager, Role::Employee])
        .employees
        .create(json!({ "name": "Bob", "organization_id": i32::from(organisation_id) }))
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert_eq!(context.db.employees.count().await, 0);
}
