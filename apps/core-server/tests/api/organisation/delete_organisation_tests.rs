use rbac_core::model::role::Role;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_delete_organisation_as_admin() {
    // GIVEN
    let (context, organisation_id) = TestContext::new_with_organisation().await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .organisations
        .delete(&organisation_id)
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["message"], "Organisation deleted");
    assert!(context.db.organisations.get(&organisation_id).await.is_none());
}

#[tokio::test]
async fn test_delete_organisation_as_manager_forbidden() {
    // GIVEN
    let (context, organisation_id) = TestContext::new_with_organisation().await;

    // WHEN
    let resp = context
        .api(&[Role::Manager])
        .organisations
        .delete(&organisation_id)
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert!(context.db.organisations.get(&organisation_id).await.is_some());
}

#[tokio::test]
async fn test_delete_organisation_with_employees_refused() {
    // GIVEN
    let (context, organisation_id) = TestContext::new_with_organisation().await;
    let employee_id = context.db.employees.create("Bob", organisation_id).await;

    // WHEN
    let resp = context
        .api(&[Role::Admin])
        .organisations
        .delete(&organisation_id)
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0003");
    assert!(context.db.organisations.get(&organisation_id).await.is_some());
    assert!(context.db.employees.get(&employee_id).await.is_some());
}

#[tokio::test]
async fn test_delete_organisation_not_found() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api(&[Role::Admin]).organisations.delete(&3).await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0001");
}
