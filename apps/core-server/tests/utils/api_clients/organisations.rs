use std::fmt::Display;

use serde_json::json;

use super::{HttpClient, Response};

pub struct OrganisationsApi {
    client: HttpClient,
}

impl OrganisationsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, name: Option<&str>) -> Response {
        let body = match name {
            Some(name) => json!({ "name": name }),
            None => json!({}),
        };

        self.client.post("/organisation", body).await
    }

    pub async fn create_form(&self, name: &str) -> Response {
        self.client
            .post_form("/organisation", &[("name", name)])
            .await
    }

    pub async fn create_raw(&self, body: &'static str) -> Response {
        self.client.post_raw("/organisation", body).await
    }

    pub async fn create_without_content_type(&self, body: &'static str) -> Response {
        self.client
            .post_without_content_type("/organisation", body)
            .await
    }

    pub async fn create_with_query(&self, name: &str) -> Response {
        self.client
            .post_without_content_type(&format!("/organisation?name={name}"), "")
            .await
    }

    pub async fn get(&self, id: &impl Display) -> Response {
        self.client.get(&format!("/organisation/{id}")).await
    }

    pub async fn update(&self, id: &impl Display, name: Option<&str>) -> Response {
        let body = match name {
            Some(name) => json!({ "name": name }),
            None => json!({}),
        };

        self.client.put(&format!("/organisation/{id}"), body).await
    }

    pub async fn delete(&self, id: &impl Display) -> Response {
        self.client.delete(&format!("/organisation/{id}")).await
    }
}
