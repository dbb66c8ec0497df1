use rbac_core::model::role::Role;
use serde_json::json;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_employee_lifecycle_with_role_checks() {
    // GIVEN
    let context = TestContext::new().await;
    let admin = context.api(&[Role::Admin]);
    let manager = context.api(&[Role::Manager]);
    let guest = context.api(&[Role::Guest]);

    // WHEN / THEN
    let resp = admin.organisations.create(Some("Acme")).await;
    assert_eq!(resp.status(), 201);
    assert_eq!(resp.json_value().await, json!({ "id": 1, "name": "Acme" }));

    let resp = admin
        .employees
        .create(json!({ "name": "Bob", "organization_id": 1 }))
        .await;
    assert_eq!(resp.status(), 201);
    let bob = json!({ "id": 1, "name": "Bob", "organization_id": 1 });
    assert_eq!(resp.json_value().await, bob);

    let resp = guest.employees.get(&1).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await, bob);

    let resp = manager
        .employees
        .update(&1, json!({ "name": "Robert", "organization_id": 1 }))
        .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.json_value().await,
        json!({ "id": 1, "name": "Robert", "organization_id": 1 })
    );

    let resp = guest.employees.delete(&1).await;
    assert_eq!(resp.status(), 403);

    let stored = context.db.employees.get(&1.into()).await.unwrap();
    assert_eq!(stored.name, "Robert");
}
