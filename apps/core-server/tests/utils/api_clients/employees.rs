use std::fmt::Display;

use serde_json::Value;

use super::{HttpClient, Response};

pub struct EmployeesApi {
    client: HttpClient,
}

impl EmployeesApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, body: Value) -> Response {
        self.client.post("/employee", body).await
    }

    pub async fn create_form(&self, name: &str, organisation_id: &str) -> Response {
        self.client
            .post_form(
                "/employee",
                &[("name", name), ("organization_id", organisation_id)],
            )
            .await
    }

    pub async fn get(&self, id: &impl Display) -> Response {
        self.client.get(&format!("/employee/{id}")).await
    }

    pub async fn update(&self, id: &impl Display, body: Value) -> Response {
        self.client.put(&format!("/employee/{id}"), body).await
    }

    pub async fn update_form(
        &self,
        id: &impl Display,
        name: &str,
        organisation_id: &str,
    ) -> Response {
        self.client
            .put_form(
                &format!("/employee/{id}"),
                &[("name", name), ("organization_id", organisation_id)],
            )
            .await
    }

    pub async fn delete(&self, id: &impl Display) -> Response {
        self.client.delete(&format!("/employee/{id}")).await
    }
}
