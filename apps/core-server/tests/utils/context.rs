use rbac_core::model::role::Role;
use rbac_server::router::start_server;
use rbac_server::token_validator::TokenAuthority;
use secrecy::SecretString;
use shared_types::OrganisationId;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use super::db_clients::DbClient;
use crate::fixtures;

pub struct TestContext {
    pub db: DbClient,
    base_url: String,
    token_authority: TokenAuthority,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = fixtures::create_config();
        let db = fixtures::create_db(&config).await;
        let _handle = tokio::spawn({
            let db = db.clone();
            async move { start_server(listener, config, db).await.unwrap() }
        });

        let token_authority =
            TokenAuthority::new(&SecretString::from(fixtures::JWT_SECRET.to_string()), 0)
                .unwrap();

        Self {
            db: DbClient::new(db),
            base_url,
            token_authority,
            _handle,
        }
    }

    pub async fn new_with_organisation() -> (Self, OrganisationId) {
        let context = Self::new().await;
        let organisation = context.db.organisations.create("Acme").await;
        (context, organisation)
    }

    /// API client authenticated as a caller holding `roles`
    pub fn api(&self, roles: &[Role]) -> Client {
        let token = self
            .token_authority
            .issue_access_token("tester", roles, None)
            .unwrap();
        self.api_with_token(Some(token))
    }

    pub fn api_with_token(&self, token: Option<String>) -> Client {
        Client::new(self.base_url.to_owned(), token)
    }

    pub fn token_authority(&self) -> &TokenAuthority {
        &self.token_authority
    }
}
