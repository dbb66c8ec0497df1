use rbac_core::model::role::Role;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_get_organisation_with_any_role() {
    // GIVEN
    let (context, organisation_id) = TestContext::new_with_organisation().await;

    for roles in [vec![], vec![Role::Guest], vec![Role::Employee, Role::Manager]] {
        // WHEN
        let resp = context.api(&roles).organisations.get(&organisation_id).await;

        // THEN
        assert_eq!(resp.status(), 200);
        let resp = resp.json_value().await;
        assert_eq!(resp["id"], i32::from(organisation_id));
        assert_eq!(resp["name"], "Acme");
    }
}

#[tokio::test]
async fn test_get_organisation_not_found() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api(&[Role::Guest]).organisations.get(&42).await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0001");
}

#[tokio::test]
async fn test_get_organisation_invalid_id() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api(&[Role::Guest]).organisations.get(&"abc").await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0010");
}
